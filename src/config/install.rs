use super::InstallationError;
use std::path::{Path, PathBuf};

pub const LIBEXEC_DIR_ENV: &str = "MANTA_LIBEXEC_DIR";
pub const BUILD_LIBEXEC_DIR: Option<&str> = option_env!("MANTA_FULL_LIBEXECDIR");
pub const RELATIVE_LIBEXEC_DIR: &str = "../libexec";

/// Location of the installed workflow tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub libexec_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(libexec_dir: impl Into<PathBuf>) -> Self {
        Self {
            libexec_dir: libexec_dir.into(),
        }
    }

    /// Environment override, then the build-time root, then `../libexec`
    /// next to the running executable.
    pub fn discover() -> Result<Self, InstallationError> {
        let env_root = std::env::var_os(LIBEXEC_DIR_ENV).map(PathBuf::from);
        let exe = std::env::current_exe().ok();
        Self::discover_from(env_root, BUILD_LIBEXEC_DIR, exe.as_deref())
    }

    pub fn discover_from(
        env_root: Option<PathBuf>,
        build_root: Option<&str>,
        current_exe: Option<&Path>,
    ) -> Result<Self, InstallationError> {
        if let Some(root) = env_root.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self::new(root));
        }
        if let Some(root) = build_root.map(str::trim).filter(|v| !v.is_empty()) {
            return Ok(Self::new(root));
        }
        current_exe
            .and_then(Path::parent)
            .map(|bin_dir| Self::new(bin_dir.join(RELATIVE_LIBEXEC_DIR)))
            .ok_or(InstallationError::RootUnavailable)
    }

    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.libexec_dir.join(file_name)
    }
}
