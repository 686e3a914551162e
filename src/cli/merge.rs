// merge.rs - Merge configuration file with CLI arguments

use super::args::{DEFAULT_FORMAT, DEFAULT_PRINTER};
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        if self.schema.is_none() {
            self.schema = config.schema;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Only override defaults, not explicit CLI values
        if let Some(format) = config.format {
            if self.format == DEFAULT_FORMAT {
                self.format = format;
            }
        }
        if let Some(printer) = config.printer {
            if self.printer == DEFAULT_PRINTER {
                self.printer = printer;
            }
        }

        // A CLI switch can only turn strict mode on
        if !self.strict && config.strict.unwrap_or(false) {
            self.strict = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            format: DEFAULT_FORMAT.to_string(),
            printer: DEFAULT_PRINTER.to_string(),
            ..Args::default()
        }
    }

    #[test]
    fn test_config_fills_gaps() {
        let config = Config {
            schema: Some("schema.toml".to_string()),
            format: Some("tsv".to_string()),
            printer: Some("silent".to_string()),
            strict: Some(true),
            output: Some("out.tsv".to_string()),
        };
        let args = default_args().merge_with_config(config);

        assert_eq!(args.schema.as_deref(), Some("schema.toml"));
        assert_eq!(args.format, "tsv");
        assert_eq!(args.printer, "silent");
        assert!(args.strict);
        assert_eq!(args.output.as_deref(), Some("out.tsv"));
    }

    #[test]
    fn test_cli_values_win() {
        let args = Args {
            schema: Some("cli.json".to_string()),
            format: "toml".to_string(),
            ..default_args()
        };
        let config = Config {
            schema: Some("config.toml".to_string()),
            format: Some("tsv".to_string()),
            ..Config::new()
        };
        let args = args.merge_with_config(config);

        assert_eq!(args.schema.as_deref(), Some("cli.json"));
        assert_eq!(args.format, "toml");
        assert_eq!(args.printer, DEFAULT_PRINTER);
    }
}
