// mod.rs - Output formatters for parsed options

use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::parser::ParsedOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(format!("Invalid output format: {}. Use: json, tsv, toml", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Toml => "toml",
        };
        write!(f, "{}", name)
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!("Failed to create parent directory '{}': {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

/// Escape characters that would break a TSV line
fn escape_tsv(field: &str) -> String {
    field
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Render parsed options as `name<TAB>value` lines
pub fn render_tsv(options: &ParsedOptions) -> String {
    let mut out = String::new();
    for (name, value) in options.iter() {
        out.push_str(&escape_tsv(name));
        out.push('\t');
        out.push_str(&escape_tsv(value));
        out.push('\n');
    }
    out
}

/// Render parsed options in the requested format
pub fn render(options: &ParsedOptions, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(options)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("Failed to serialize options as JSON: {}", e)),
        OutputFormat::Tsv => Ok(render_tsv(options)),
        OutputFormat::Toml => toml::to_string(options)
            .map_err(|e| format!("Failed to serialize options as TOML: {}", e)),
    }
}

/// Write parsed options to a file
pub fn write_options(
    file_path: &str,
    options: &ParsedOptions,
    format: OutputFormat,
) -> Result<(), String> {
    let content = render(options, format)?;

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    tracing::info!(path = file_path, %format, options = options.len(), "options written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser;
    use crate::schema::{OptionSpec, Schema};

    fn sample_options() -> ParsedOptions {
        let schema = Schema::builder()
            .option("file", OptionSpec::new().position(0))
            .build()
            .unwrap();
        parser()
            .options(schema)
            .try_parse(&["a b.txt", "--color", "green"])
            .unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("toml".parse::<OutputFormat>().unwrap(), OutputFormat::Toml);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Tsv.to_string(), "tsv");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_options(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "a b.txt");
        assert_eq!(value["color"], "green");
    }

    #[test]
    fn test_render_tsv() {
        let tsv = render(&sample_options(), OutputFormat::Tsv).unwrap();
        assert_eq!(tsv, "color\tgreen\nfile\ta b.txt\n");
        assert_eq!(escape_tsv("a\tb\nc"), "a\\tb\\nc");
    }

    #[test]
    fn test_render_toml() {
        let rendered = render(&sample_options(), OutputFormat::Toml).unwrap();
        let table: toml::Table = toml::from_str(&rendered).unwrap();
        assert_eq!(table["file"].as_str(), Some("a b.txt"));
    }

    #[test]
    fn test_write_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("options.tsv");
        let path = path.to_str().unwrap();

        write_options(path, &sample_options(), OutputFormat::Tsv).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("color\tgreen"));
    }
}
