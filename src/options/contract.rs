use super::{OptionError, OptionGroup, OptionMap};
use crate::config::InstallationError;
use std::path::Path;

/// Hooks a configure driver calls, in declaration order, for one workflow.
pub trait WorkflowOptions {
    /// Registers the options users may set on the command line.
    fn add_workflow_group_options(&self, group: &mut OptionGroup);

    /// Defaults computed before any user input is merged.
    fn option_defaults(&self) -> Result<OptionMap, InstallationError>;

    /// Canonicalizes merged values in place. Never fails.
    fn validate_and_sanitize_existing_options(&self, options: &mut OptionMap, cwd: &Path);

    /// Checks that every option the workflow cannot run without is set.
    fn validate_option_existence(&self, options: &OptionMap) -> Result<(), OptionError>;
}
