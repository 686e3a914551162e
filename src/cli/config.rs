// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Schema file used when --schema is not given
    pub schema: Option<String>,

    // Output
    pub format: Option<String>,
    pub output: Option<String>,

    // Parsing behaviour
    pub printer: Option<String>,
    pub strict: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        tracing::info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# argspec.toml - Configuration file for argspec
# Command line arguments will override these settings

# =============================================================================
# SCHEMA
# =============================================================================

# Schema file (.toml or .json) describing the accepted options
schema = "schema.toml"

# =============================================================================
# OUTPUT
# =============================================================================

# Output format for parsed options: json, tsv, toml
format = "json"

# Write parsed options to a file instead of stdout
# output = "options.json"

# =============================================================================
# PARSING
# =============================================================================

# Where diagnostics go on failure: stderr, stdout, silent
printer = "stderr"

# Reject positional tokens that no option declares a slot for
strict = false
"#
        .to_string()
    }
}
