// engine.rs - Parser handle tying schema, printer and validation together

use std::fmt;
use std::rc::Rc;

use super::result::ParsedOptions;
use super::tokenize::bind_tokens;
use super::validation::{apply_defaults, validate};
use crate::error::ParseError;
use crate::printers::Printer;
use crate::schema::Schema;

/// Parser configuration: the schema, an optional printer and strictness.
///
/// Every handle is independent. A parse never changes the handle, so one
/// handle can be reused for any number of parses with identical results.
#[derive(Clone, Default)]
pub struct Parser {
    schema: Schema,
    printer: Option<Rc<dyn Printer>>,
    strict_positionals: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole schema
    pub fn options(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Attach the diagnostic printer; the last one attached wins
    pub fn printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printer = Some(Rc::new(printer));
        self
    }

    /// Attach a printer already shared elsewhere (e.g. from a `PrinterRegistry`)
    pub fn shared_printer(mut self, printer: Rc<dyn Printer>) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Reject positional tokens whose slot no option declares
    pub fn strict_positionals(mut self, strict: bool) -> Self {
        self.strict_positionals = strict;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn has_printer(&self) -> bool {
        self.printer.is_some()
    }

    /// Parse tokens and return the first failure as a value.
    /// The printer is never called.
    pub fn try_parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedOptions, ParseError> {
        let mut bindings = bind_tokens(&self.schema, tokens, self.strict_positionals)?;
        apply_defaults(&self.schema, &mut bindings.values);
        validate(&self.schema, &bindings.values)?;

        tracing::debug!(
            bound = bindings.values.len(),
            ignored = bindings.ignored.len(),
            "parse succeeded"
        );
        Ok(ParsedOptions::new(bindings.values, bindings.ignored))
    }

    /// Parse tokens, sending the diagnostic of a failure to the printer.
    ///
    /// Returns `None` on failure. Without a printer the diagnostic is
    /// dropped, so callers relying on this form should attach one.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Option<ParsedOptions> {
        match self.try_parse(tokens) {
            Ok(options) => Some(options),
            Err(err) => {
                let message = err.to_string();
                match &self.printer {
                    Some(printer) => printer.print(&message),
                    None => tracing::debug!(
                        kind = %err.kind(),
                        message = message.as_str(),
                        "no printer attached, diagnostic dropped"
                    ),
                }
                None
            }
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("schema", &self.schema)
            .field("printer", &self.printer.as_ref().map(|p| p.name().to_string()))
            .field("strict_positionals", &self.strict_positionals)
            .finish()
    }
}

/// Create a new, independent parser handle
pub fn parser() -> Parser {
    Parser::new()
}
