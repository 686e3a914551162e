// loader.rs - Schema file support (TOML and JSON)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::option_spec::OptionSpec;
use super::registry::Schema;
use crate::error::SchemaError;

impl Schema {
    /// Parse a schema from TOML: one table per option name
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        let options: BTreeMap<String, OptionSpec> =
            toml::from_str(content).map_err(|e| SchemaError::Format(e.to_string()))?;
        Schema::from_map(options)
    }

    /// Parse a schema from a JSON object keyed by option name
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        let options: BTreeMap<String, OptionSpec> =
            serde_json::from_str(content).map_err(|e| SchemaError::Format(e.to_string()))?;
        Schema::from_map(options)
    }

    /// Load a schema file, picking the format from the extension.
    /// Anything other than `.json` is read as TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let schema = if is_json {
            Schema::from_json_str(&content)?
        } else {
            Schema::from_toml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            options = schema.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Serialize the schema back to TOML
    pub fn to_toml_string(&self) -> Result<String, SchemaError> {
        let options: BTreeMap<&str, &OptionSpec> = self.iter().collect();
        toml::to_string_pretty(&options).map_err(|e| SchemaError::Format(e.to_string()))
    }

    /// Generate a sample schema file with comments
    pub fn generate_sample() -> String {
        r#"# schema.toml - Option schema for argspec
# One table per option. Every field is optional.

# =============================================================================
# POSITIONAL OPTIONS
# =============================================================================

# First non-flag token binds to `file`; `--file path` works too
[file]
position = 0
required = true

# Second non-flag token
[target]
position = 1

# =============================================================================
# RESTRICTED VALUES
# =============================================================================

# Value must match one of the choices exactly
[color]
choices = ["green", "blue"]
default = "green"

# =============================================================================
# FREE-FORM FLAGS
# =============================================================================

# Only reachable as `--label value`
[label]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_toml() {
        let schema = Schema::from_toml_str(
            r#"
            [file]
            position = 0
            required = true

            [color]
            choices = ["green", "blue"]
            "#,
        )
        .unwrap();

        assert_eq!(schema.option_at(0), Some("file"));
        assert!(schema.get("file").unwrap().required);
        assert!(schema.get("color").unwrap().allows("blue"));
    }

    #[test]
    fn test_from_json() {
        let schema = Schema::from_json_str(
            r#"{"file": {"position": 0}, "color": {"choices": ["green", "blue"]}}"#,
        )
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert!(!schema.get("file").unwrap().required);
    }

    #[test]
    fn test_structural_errors_surface_from_files() {
        let result = Schema::from_json_str(r#"{"a": {"position": 0}, "b": {"position": 0}}"#);
        assert!(matches!(result, Err(SchemaError::DuplicatePosition { position: 0, .. })));

        let result = Schema::from_toml_str("[file]\nposition = -1\n");
        assert!(matches!(result, Err(SchemaError::Format(_))));
    }

    #[test]
    fn test_sample_is_valid() {
        let schema = Schema::from_toml_str(&Schema::generate_sample()).unwrap();
        assert_eq!(schema.option_at(0), Some("file"));
        assert_eq!(schema.option_at(1), Some("target"));
        assert!(schema.contains("label"));
    }

    #[test]
    fn test_toml_round_trip() {
        let schema = Schema::from_toml_str(&Schema::generate_sample()).unwrap();
        let reloaded = Schema::from_toml_str(&schema.to_toml_string().unwrap()).unwrap();
        assert_eq!(schema, reloaded);
    }

    #[test]
    fn test_from_file() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"file": {{"position": 0, "required": true}}}}"#).unwrap();
        let schema = Schema::from_file(json.path()).unwrap();
        assert!(schema.get("file").unwrap().required);

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(toml_file, "[color]\nchoices = [\"green\"]\n").unwrap();
        let schema = Schema::from_file(toml_file.path()).unwrap();
        assert!(schema.contains("color"));

        let missing = Schema::from_file("/nonexistent/schema.toml");
        assert!(matches!(missing, Err(SchemaError::Io { .. })));
    }
}
