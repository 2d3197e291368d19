/// Problems with user-supplied options. Re-running with corrected input fixes them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("must specify {description} (--{name})")]
    Missing { name: String, description: String },
    #[error("unknown option `{name}`")]
    Unknown { name: String },
    #[error("option `--{name}` requires a value")]
    MissingValue { name: String },
    #[error("option `--{name}` expects {expected}, got `{value}`")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
    #[error("unexpected argument `{value}`")]
    UnexpectedArgument { value: String },
}
