// tokenize.rs - Single-pass token scan binding values to option names

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::schema::Schema;

/// Prefix marking a flag token
pub const FLAG_PREFIX: &str = "--";

/// Values collected by the scan, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub values: BTreeMap<String, String>,
    /// Positional tokens whose slot no option declares
    pub ignored: Vec<String>,
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Walk the tokens left to right, binding flags by name and everything
/// else by positional slot.
///
/// A flag consumes the following token as its value. When there is no
/// following token, or it is itself a flag, the scan stops with
/// `MissingFlagValue`. Later bindings of the same name overwrite earlier ones.
pub fn bind_tokens<S: AsRef<str>>(
    schema: &Schema,
    tokens: &[S],
    strict_positionals: bool,
) -> Result<Bindings, ParseError> {
    let mut bindings = Bindings::default();
    let mut position = 0usize;
    let mut index = 0usize;

    while index < tokens.len() {
        let token = tokens[index].as_ref();

        if let Some(name) = token.strip_prefix(FLAG_PREFIX) {
            let value = match tokens.get(index + 1).map(|t| t.as_ref()) {
                Some(value) if !is_flag(value) => value,
                _ => {
                    return Err(ParseError::MissingFlagValue {
                        flag: token.to_string(),
                    })
                }
            };

            tracing::trace!(option = name, value, "bound flag");
            bindings.values.insert(name.to_string(), value.to_string());
            index += 2;
            continue;
        }

        match schema.option_at(position) {
            Some(name) => {
                tracing::trace!(option = name, position, value = token, "bound positional");
                bindings.values.insert(name.to_string(), token.to_string());
            }
            None if strict_positionals => {
                return Err(ParseError::UnexpectedPositional {
                    token: token.to_string(),
                    position,
                });
            }
            None => {
                tracing::debug!(position, token, "no option declares this position, ignoring");
                bindings.ignored.push(token.to_string());
            }
        }

        position += 1;
        index += 1;
    }

    Ok(bindings)
}
