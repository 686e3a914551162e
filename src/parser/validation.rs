// validation.rs - Post-scan validation pipeline

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::schema::Schema;

/// Bind declared defaults for options the tokens left unset
pub fn apply_defaults(schema: &Schema, values: &mut BTreeMap<String, String>) {
    for (name, spec) in schema.iter() {
        if let Some(default) = &spec.default {
            if !values.contains_key(name) {
                tracing::debug!(option = name, default = default.as_str(), "applying default");
                values.insert(name.to_string(), default.clone());
            }
        }
    }
}

/// Run the required pass, then the choices pass; stop at the first failure
pub fn validate(schema: &Schema, values: &BTreeMap<String, String>) -> Result<(), ParseError> {
    check_required(schema, values)?;
    check_choices(schema, values)?;
    Ok(())
}

fn check_required(schema: &Schema, values: &BTreeMap<String, String>) -> Result<(), ParseError> {
    for (name, spec) in schema.iter() {
        if spec.required && !values.contains_key(name) {
            return Err(ParseError::MissingRequired {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn check_choices(schema: &Schema, values: &BTreeMap<String, String>) -> Result<(), ParseError> {
    for (name, spec) in schema.iter() {
        let (Some(choices), Some(value)) = (spec.allowed_choices(), values.get(name)) else {
            continue;
        };
        if !choices.contains(value) {
            return Err(ParseError::InvalidChoice {
                name: name.to_string(),
                value: value.clone(),
                choices: choices.to_vec(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OptionSpec;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_required_pass_runs_before_choices() {
        let schema = Schema::builder()
            .option("color", OptionSpec::new().choices(["green", "blue"]))
            .option("size", OptionSpec::new().required())
            .build()
            .unwrap();

        // Both rules are broken; the required failure wins
        let err = validate(&schema, &values(&[("color", "red")])).unwrap_err();
        assert_eq!(err, ParseError::MissingRequired { name: "size".to_string() });
    }

    #[test]
    fn test_choices_listed_in_declaration_order() {
        let schema = Schema::builder()
            .option("color", OptionSpec::new().choices(["green", "blue", "amber"]))
            .build()
            .unwrap();

        let err = validate(&schema, &values(&[("color", "red")])).unwrap_err();
        assert_eq!(err.to_string(), "color must be one of: green, blue, amber");
        assert!(validate(&schema, &values(&[("color", "amber")])).is_ok());
        // Unbound, not required: nothing to check
        assert!(validate(&schema, &values(&[])).is_ok());
    }

    #[test]
    fn test_undeclared_values_pass() {
        let schema = Schema::empty();
        assert!(validate(&schema, &values(&[("extra", "1")])).is_ok());
    }

    #[test]
    fn test_apply_defaults() {
        let schema = Schema::builder()
            .option("color", OptionSpec::new().default_value("green"))
            .option("mode", OptionSpec::new().default_value("fast"))
            .build()
            .unwrap();

        let mut bound = values(&[("mode", "slow")]);
        apply_defaults(&schema, &mut bound);
        assert_eq!(bound, values(&[("color", "green"), ("mode", "slow")]));
    }
}
