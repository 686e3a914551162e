// registry.rs - Schema registry mapping option names to their specs

use std::collections::{BTreeMap, HashMap};

use super::option_spec::OptionSpec;
use crate::error::SchemaError;

/// Validated mapping from option name to its declared constraints.
///
/// Iteration follows option name order, which is also the order the
/// validation pipeline visits options in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    options: BTreeMap<String, OptionSpec>,
    positions: HashMap<usize, String>,
}

impl Schema {
    /// Schema with no declared options
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Build a schema from an already keyed map, checking structural constraints
    pub fn from_map(options: BTreeMap<String, OptionSpec>) -> Result<Self, SchemaError> {
        let mut positions: HashMap<usize, String> = HashMap::new();

        for (name, spec) in &options {
            if name.is_empty() {
                return Err(SchemaError::EmptyName);
            }

            if let (Some(default), Some(choices)) = (&spec.default, spec.allowed_choices()) {
                if !choices.contains(default) {
                    return Err(SchemaError::DefaultNotInChoices {
                        name: name.clone(),
                        default: default.clone(),
                        choices: choices.to_vec(),
                    });
                }
            }

            if let Some(position) = spec.position {
                if let Some(first) = positions.get(&position) {
                    return Err(SchemaError::DuplicatePosition {
                        position,
                        first: first.clone(),
                        second: name.clone(),
                    });
                }
                positions.insert(position, name.clone());
            }
        }

        Ok(Self { options, positions })
    }

    /// Get the spec declared for an option
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Name of the option bound to a positional slot, if any
    pub fn option_at(&self, position: usize) -> Option<&str> {
        self.positions.get(&position).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.options.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn names(&self) -> Vec<&str> {
        self.options.keys().map(|s| s.as_str()).collect()
    }

    pub fn required_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name)
            .collect()
    }

    /// Number of declared positional slots
    pub fn positional_count(&self) -> usize {
        self.positions.len()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, OptionSpec> {
        self.options
    }
}

impl TryFrom<BTreeMap<String, OptionSpec>> for Schema {
    type Error = SchemaError;

    fn try_from(options: BTreeMap<String, OptionSpec>) -> Result<Self, Self::Error> {
        Schema::from_map(options)
    }
}

/// Collects option declarations one at a time, then validates them together
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    declared: Vec<(String, OptionSpec)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option
    pub fn option(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.declared.push((name.into(), spec));
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut options = BTreeMap::new();
        for (name, spec) in self.declared {
            if options.contains_key(&name) {
                return Err(SchemaError::DuplicateOption(name));
            }
            options.insert(name, spec);
        }
        Schema::from_map(options)
    }
}
