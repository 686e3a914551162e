// error.rs - Parse and schema error types

use std::fmt;
use thiserror::Error;

/// Which validation rule a failed parse tripped over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A flag token had no value token after it (detected during the scan)
    MissingFlagValue,
    /// A required option ended up without a bound value
    MissingRequired,
    /// A bound value is not one of the declared choices
    InvalidChoice,
    /// A positional token matched no declared slot (strict mode only)
    UnexpectedPositional,
}

impl FailureKind {
    pub fn description(&self) -> &str {
        match self {
            FailureKind::MissingFlagValue => "flag without a value",
            FailureKind::MissingRequired => "required option missing",
            FailureKind::InvalidChoice => "value outside declared choices",
            FailureKind::UnexpectedPositional => "positional argument without a slot",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::MissingFlagValue => "MissingFlagValue",
            FailureKind::MissingRequired => "MissingRequired",
            FailureKind::InvalidChoice => "InvalidChoice",
            FailureKind::UnexpectedPositional => "UnexpectedPositional",
        };
        write!(f, "{}", name)
    }
}

/// First failure found while parsing a token sequence.
///
/// The `Display` output is the diagnostic text handed to printers, so the
/// formats below are part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `flag` is the token exactly as it appeared, prefix included
    #[error("'{flag}' expects a value")]
    MissingFlagValue { flag: String },

    #[error("{name} argument is required")]
    MissingRequired { name: String },

    #[error("{name} must be one of: {}", .choices.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("unexpected positional argument '{token}' at position {position}")]
    UnexpectedPositional { token: String, position: usize },
}

impl ParseError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ParseError::MissingFlagValue { .. } => FailureKind::MissingFlagValue,
            ParseError::MissingRequired { .. } => FailureKind::MissingRequired,
            ParseError::InvalidChoice { .. } => FailureKind::InvalidChoice,
            ParseError::UnexpectedPositional { .. } => FailureKind::UnexpectedPositional,
        }
    }
}

/// Structural problems in a schema, reported when the schema is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("option name must not be empty")]
    EmptyName,

    #[error("option '{0}' is declared more than once")]
    DuplicateOption(String),

    #[error("options '{first}' and '{second}' both claim position {position}")]
    DuplicatePosition {
        position: usize,
        first: String,
        second: String,
    },

    #[error("default '{default}' of option '{name}' is not one of: {}", .choices.join(", "))]
    DefaultNotInChoices {
        name: String,
        default: String,
        choices: Vec<String>,
    },

    #[error("failed to read schema file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse schema: {0}")]
    Format(String),
}
