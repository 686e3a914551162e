// validation.rs - Input validation utilities

use std::path::Path;
use std::rc::Rc;

use crate::cli::args::Args;
use crate::output::OutputFormat;
use crate::printers::{Printer, PrinterRegistry};
use crate::schema::Schema;

pub struct ValidationResult {
    pub schema: Schema,
    pub format: OutputFormat,
    pub printer: Rc<dyn Printer>,
    pub strict: bool,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate printer
    let registry = PrinterRegistry::new();
    let printer = registry.get_printer(&args.printer).ok_or_else(|| {
        format!(
            "Invalid printer '{}'. Available: {}",
            args.printer,
            registry.get_printer_names().join(", ")
        )
    })?;

    // Validate output format
    let format: OutputFormat = args.format.parse()?;

    if args.check_schema && args.output.is_some() {
        return Err("--output is not compatible with --check-schema (nothing is parsed)".to_string());
    }

    // Load and check the schema
    let schema_path = args.schema.as_ref().ok_or("--schema is required")?;
    if !Path::new(schema_path).exists() {
        return Err(format!("Schema file '{}' does not exist", schema_path));
    }
    let schema = Schema::from_file(schema_path).map_err(|e| e.to_string())?;

    Ok(ValidationResult {
        schema,
        format,
        printer,
        strict: args.strict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{DEFAULT_FORMAT, DEFAULT_PRINTER};
    use std::io::Write;

    fn args_with_schema(path: &str) -> Args {
        Args {
            schema: Some(path.to_string()),
            format: DEFAULT_FORMAT.to_string(),
            printer: DEFAULT_PRINTER.to_string(),
            ..Args::default()
        }
    }

    fn schema_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[file]\nposition = 0\nrequired = true\n").unwrap();
        file
    }

    #[test]
    fn test_valid_args() {
        let file = schema_file();
        let args = Args {
            format: "tsv".to_string(),
            printer: "silent".to_string(),
            strict: true,
            ..args_with_schema(file.path().to_str().unwrap())
        };

        let result = validate_args(&args).unwrap();
        assert_eq!(result.format, OutputFormat::Tsv);
        assert_eq!(result.printer.name(), "silent");
        assert!(result.strict);
        assert_eq!(result.schema.option_at(0), Some("file"));
    }

    #[test]
    fn test_invalid_printer() {
        let file = schema_file();
        let args = Args {
            printer: "pager".to_string(),
            ..args_with_schema(file.path().to_str().unwrap())
        };
        let err = validate_args(&args).err().unwrap();
        assert_eq!(err, "Invalid printer 'pager'. Available: silent, stderr, stdout");
    }

    #[test]
    fn test_invalid_format() {
        let file = schema_file();
        let args = Args {
            format: "xml".to_string(),
            ..args_with_schema(file.path().to_str().unwrap())
        };
        assert!(validate_args(&args).err().unwrap().contains("Invalid output format"));
    }

    #[test]
    fn test_missing_schema() {
        let args = Args {
            schema: None,
            ..args_with_schema("unused")
        };
        assert_eq!(validate_args(&args).err().unwrap(), "--schema is required");

        let args = args_with_schema("/nonexistent/schema.toml");
        assert!(validate_args(&args).err().unwrap().contains("does not exist"));
    }

    #[test]
    fn test_check_schema_rejects_output() {
        let file = schema_file();
        let args = Args {
            check_schema: true,
            output: Some("out.json".to_string()),
            ..args_with_schema(file.path().to_str().unwrap())
        };
        assert!(validate_args(&args).err().unwrap().contains("--check-schema"));
    }
}
