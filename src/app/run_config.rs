use super::ResolvedConfiguration;
use crate::config::ConfigError;
use crate::shared::fs_atomic::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};

pub const RUN_CONFIG_FILE_NAME: &str = "runWorkflow.config.yaml";

pub fn run_config_path(run_dir: &Path) -> PathBuf {
    run_dir.join(RUN_CONFIG_FILE_NAME)
}

/// Creates the run directory and records the resolved options inside it.
pub fn write_run_config(config: &ResolvedConfiguration) -> Result<PathBuf, ConfigError> {
    let run_dir = config.run_dir();
    fs::create_dir_all(run_dir).map_err(|source| ConfigError::CreateDir {
        path: run_dir.display().to_string(),
        source,
    })?;

    let path = run_config_path(run_dir);
    let body = serde_yaml::to_string(&config.options).map_err(|source| ConfigError::Encode {
        path: path.display().to_string(),
        source,
    })?;
    atomic_write_file(&path, body.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote run config");
    Ok(path)
}
