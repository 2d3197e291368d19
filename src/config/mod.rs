pub mod clean;
pub mod defaults;
pub mod error;
pub mod install;
pub mod load;

pub use clean::{clean_hidden_keys, is_hidden_key, HIDDEN_KEY_PREFIX, SELF_KEY};
pub use defaults::{Artifact, WorkflowDefaults, LIBEXEC_DIR_KEY};
pub use error::{ConfigError, InstallationError};
pub use install::{InstallLayout, BUILD_LIBEXEC_DIR, LIBEXEC_DIR_ENV, RELATIVE_LIBEXEC_DIR};
pub use load::load_overrides_file;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn overrides_file_drops_hidden_keys() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("overrides.yaml");
        fs::write(
            &path,
            "runDir: out\n__builtins__: x\nself: y\nbgzipBin: /usr/bin/bgzip\n",
        )
        .expect("write overrides");

        let overrides = load_overrides_file(&path).expect("load overrides");
        let keys: Vec<&str> = overrides.keys().collect();
        assert_eq!(keys, vec!["bgzipBin", "runDir"]);
    }

    #[test]
    fn overrides_file_treats_null_entries_as_unset() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("overrides.yaml");
        fs::write(&path, "runDir:\ntabixBin: ~\nsamtoolsBin: /bin/samtools\n")
            .expect("write overrides");

        let overrides = load_overrides_file(&path).expect("load overrides");
        let keys: Vec<&str> = overrides.keys().collect();
        assert_eq!(keys, vec!["samtoolsBin"]);
    }

    #[test]
    fn overrides_file_rejects_non_mapping_yaml() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("overrides.yaml");
        fs::write(&path, "- runDir\n- out\n").expect("write overrides");

        let err = load_overrides_file(&path).expect_err("list is not a mapping");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn missing_overrides_file_is_a_read_error() {
        let tmp = tempdir().expect("tempdir");
        let err = load_overrides_file(&tmp.path().join("absent.yaml")).expect_err("absent");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.is_user_error());
    }
}
