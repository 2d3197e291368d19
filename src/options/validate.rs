use super::{OptionError, OptionValue};

/// Fails when a required option is unset or blank.
pub fn assert_option_exists(
    name: &str,
    value: Option<&OptionValue>,
    description: &str,
) -> Result<(), OptionError> {
    match value {
        Some(value) if !value.is_blank() => Ok(()),
        _ => Err(OptionError::Missing {
            name: name.to_string(),
            description: description.to_string(),
        }),
    }
}
