// result.rs - Successful parse output

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Option name to bound value, as produced by a successful parse.
///
/// Values are returned exactly as they appeared in the tokens (or as
/// declared defaults); nothing is coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    values: BTreeMap<String, String>,
    ignored: Vec<String>,
}

impl ParsedOptions {
    pub(crate) fn new(values: BTreeMap<String, String>, ignored: Vec<String>) -> Self {
        Self { values, ignored }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Positional tokens that matched no declared slot
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl IntoIterator for ParsedOptions {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Serialize for ParsedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}
