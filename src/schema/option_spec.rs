// option_spec.rs - Declared constraints for a single option

use serde::{Deserialize, Serialize};

/// Constraints declared for one option name.
///
/// Every field is optional in schema files; an empty spec accepts any value
/// supplied through `--name value` and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionSpec {
    /// Positional slot this option may bind from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Option must have a value once the scan is done
    #[serde(default)]
    pub required: bool,

    /// Allowed values, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,

    /// Value bound when the tokens supply none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl OptionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Declared choices, or `None` when the option is unrestricted.
    /// An empty list counts as unrestricted.
    pub fn allowed_choices(&self) -> Option<&[String]> {
        match &self.choices {
            Some(choices) if !choices.is_empty() => Some(choices.as_slice()),
            _ => None,
        }
    }

    /// Check a value against the declared choices (exact match, no coercion)
    pub fn allows(&self, value: &str) -> bool {
        match self.allowed_choices() {
            Some(choices) => choices.iter().any(|c| c == value),
            None => true,
        }
    }
}
