use crate::config::{load_overrides_file, ConfigError};
use crate::options::{
    OptionError, OptionGroup, OptionMap, WorkflowOptions, RUN_DIR_KEY, WORKFLOW_GROUP_TITLE,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ConfigureRequest {
    pub overrides_file: Option<PathBuf>,
    pub cli: OptionMap,
    pub cwd: PathBuf,
}

/// Options after merge, sanitize and validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub options: OptionMap,
    run_dir: PathBuf,
}

impl ResolvedConfiguration {
    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }
}

/// Runs one workflow's option hooks in their fixed order.
pub struct ConfigureDriver<'a> {
    workflow: &'a dyn WorkflowOptions,
    group: OptionGroup,
}

impl<'a> ConfigureDriver<'a> {
    pub fn new(workflow: &'a dyn WorkflowOptions) -> Self {
        let mut group = OptionGroup::new(WORKFLOW_GROUP_TITLE);
        workflow.add_workflow_group_options(&mut group);
        Self { workflow, group }
    }

    pub fn group(&self) -> &OptionGroup {
        &self.group
    }

    pub fn configure(&self, request: &ConfigureRequest) -> Result<ResolvedConfiguration, ConfigError> {
        tracing::debug!("resolving option defaults");
        let mut options = self.workflow.option_defaults()?;
        if request.cwd.to_str().is_none() {
            return Err(ConfigError::NonUtf8CurrentDir {
                path: request.cwd.display().to_string(),
            });
        }

        if let Some(path) = &request.overrides_file {
            tracing::debug!(path = %path.display(), "merging overrides file");
            let overrides = self.check_overrides(&options, load_overrides_file(path)?)?;
            options.merge(overrides);
        }
        tracing::debug!(count = request.cli.len(), "merging command-line options");
        let cli = self.check_overrides(&options, request.cli.clone())?;
        options.merge(cli);

        self.workflow
            .validate_and_sanitize_existing_options(&mut options, &request.cwd);
        self.workflow.validate_option_existence(&options)?;

        let run_dir = options
            .get_text(RUN_DIR_KEY)
            .map(PathBuf::from)
            .ok_or(ConfigError::RunDirUndefined)?;
        Ok(ResolvedConfiguration { options, run_dir })
    }

    /// Defaults for help output; an unusable install shows no defaults.
    pub fn defaults_for_help(&self) -> OptionMap {
        self.workflow.option_defaults().unwrap_or_default()
    }

    /// Rejects unknown names and brings registered options to their kind.
    /// Unregistered defaults, such as tool paths, pass through as given.
    fn check_overrides(
        &self,
        defaults: &OptionMap,
        overrides: OptionMap,
    ) -> Result<OptionMap, OptionError> {
        overrides
            .into_iter()
            .map(|(name, value)| {
                if self.group.find(&name).is_some() {
                    let value = self.group.coerce_value(&name, value)?;
                    Ok((name, value))
                } else if defaults.contains_key(&name) {
                    Ok((name, value))
                } else {
                    Err(OptionError::Unknown { name })
                }
            })
            .collect()
    }
}
