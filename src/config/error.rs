use crate::options::OptionError;

/// A broken or incomplete install. Configuration cannot continue.
#[derive(Debug, thiserror::Error)]
pub enum InstallationError {
    #[error(
        "failed to locate the installation root; set MANTA_LIBEXEC_DIR or build with MANTA_FULL_LIBEXECDIR"
    )]
    RootUnavailable,
    #[error("installation root {path} is not a directory")]
    RootNotDirectory { path: String },
    #[error("installation root {path} is not valid UTF-8")]
    NonUtf8Root { path: String },
    #[error("installation is missing {artifact}: expected a regular file at {path}")]
    MissingArtifact { artifact: &'static str, path: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Installation(#[from] InstallationError),
    #[error(transparent)]
    Option(#[from] OptionError),
    #[error("failed to read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode yaml for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to resolve the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("current working directory {path} is not valid UTF-8")]
    NonUtf8CurrentDir { path: String },
    #[error("workflow options do not define a run directory")]
    RunDirUndefined,
}

impl ConfigError {
    /// True when re-running with corrected input can succeed.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Option(_) | Self::Read { .. } | Self::Parse { .. })
    }
}
