use super::{clean_hidden_keys, is_hidden_key, ConfigError};
use crate::options::{OptionMap, OptionValue};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Reads a flat YAML mapping of option overrides. Hidden keys are dropped and
/// null entries count as unset.
pub fn load_overrides_file(path: &Path) -> Result<OptionMap, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let bindings: BTreeMap<String, Option<OptionValue>> =
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    for key in bindings.keys().filter(|key| is_hidden_key(key)) {
        tracing::warn!(path = %path.display(), key = %key, "ignoring hidden key in overrides file");
    }
    Ok(clean_hidden_keys(bindings)
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}
