// lib.rs - argspec library root

//! # argspec - Declarative command-line argument parsing
//!
//! Describe the options a program expects in a [`Schema`], then hand a raw
//! token sequence to a [`Parser`]. The result is either the bound option
//! values or the first validation failure.
//!
//! ## Features
//!
//! - **Flag and positional binding**: `--name value` or by positional slot
//! - **Validation**: required options and allowed value choices
//! - **Pluggable diagnostics**: send failure messages to any [`Printer`]
//! - **Schema files**: load schemas from TOML or JSON
//!
//! ## Basic Usage
//!
//! ```rust
//! use argspec::prelude::*;
//!
//! let schema = Schema::builder()
//!     .option("file", OptionSpec::new().position(0).required())
//!     .option("color", OptionSpec::new().choices(["green", "blue"]))
//!     .build()?;
//!
//! let parser = argspec::parser()
//!     .options(schema)
//!     .printer(|message: &str| eprintln!("{}", message));
//!
//! let options = parser.parse(&["input.txt", "--color", "green"]).unwrap();
//! assert_eq!(options.get("file"), Some("input.txt"));
//! assert_eq!(options.get("color"), Some("green"));
//!
//! let err = parser.try_parse(&["--color", "red"]).unwrap_err();
//! assert_eq!(err.to_string(), "file argument is required");
//! # Ok::<(), argspec::SchemaError>(())
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod printers;
pub mod schema;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::error::{FailureKind, ParseError, SchemaError};
    pub use crate::parser::{parser, ParsedOptions, Parser};
    pub use crate::printers::{MemoryPrinter, Printer, PrinterRegistry};
    pub use crate::schema::{OptionSpec, Schema};
}

// Re-export main types at the root level for convenience
pub use error::{FailureKind, ParseError, SchemaError};
pub use parser::{parser, ParsedOptions, Parser};
pub use printers::{Printer, PrinterRegistry};
pub use schema::{OptionSpec, Schema, SchemaBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("argspec v{} - declarative command-line argument parser", VERSION)
}
