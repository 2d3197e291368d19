use super::{
    assert_option_exists, sanitize_path_option, OptionError, OptionGroup, OptionKind, OptionMap,
    OptionSpec, WorkflowOptions, WORKFLOW_GROUP_TITLE,
};
use crate::config::{InstallLayout, InstallationError, WorkflowDefaults};
use std::path::Path;

pub const RUN_DIR_KEY: &str = "runDir";
pub const RUN_DIR_DESCRIPTION: &str = "run directory";
pub const RUN_DIR_HELP: &str =
    "Run script and run output will be written to this directory [required] (default: %default)";

/// Option hooks for the structural variant workflow.
#[derive(Debug, Clone)]
pub struct MantaWorkflowOptions {
    layout: InstallLayout,
}

impl MantaWorkflowOptions {
    pub fn new(layout: InstallLayout) -> Self {
        Self { layout }
    }
}

impl WorkflowOptions for MantaWorkflowOptions {
    fn add_workflow_group_options(&self, group: &mut OptionGroup) {
        group.add_option(
            OptionSpec::new(RUN_DIR_KEY, OptionKind::String, RUN_DIR_HELP)
                .required(RUN_DIR_DESCRIPTION),
        );
    }

    fn option_defaults(&self) -> Result<OptionMap, InstallationError> {
        WorkflowDefaults::resolve(&self.layout).map(|defaults| defaults.to_option_map())
    }

    fn validate_and_sanitize_existing_options(&self, options: &mut OptionMap, cwd: &Path) {
        sanitize_path_option(options, RUN_DIR_KEY, cwd);
    }

    fn validate_option_existence(&self, options: &OptionMap) -> Result<(), OptionError> {
        let mut group = OptionGroup::new(WORKFLOW_GROUP_TITLE);
        self.add_workflow_group_options(&mut group);
        for (spec, description) in group.required_specs() {
            let value = options.get(&spec.dest);
            assert_option_exists(&spec.dest, value, description)?;
            if let Some(value) = value {
                group.coerce_value(&spec.dest, value.clone())?;
            }
        }
        Ok(())
    }
}
