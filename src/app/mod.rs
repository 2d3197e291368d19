pub mod cli;
pub mod driver;
pub mod run_config;

pub use cli::{cli_help_lines, parse_args, CliCommand, ConfigureArgs};
pub use driver::{ConfigureDriver, ConfigureRequest, ResolvedConfiguration};
pub use run_config::{run_config_path, write_run_config, RUN_CONFIG_FILE_NAME};

use crate::config::{ConfigError, InstallLayout};
use crate::options::{MantaWorkflowOptions, WorkflowOptions};
use std::path::PathBuf;

/// Configures the workflow installed next to this executable.
pub fn run_cli(args: Vec<String>) -> Result<String, ConfigError> {
    let layout = InstallLayout::discover()?;
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    run_cli_with(&MantaWorkflowOptions::new(layout), &args, cwd)
}

pub fn run_cli_with(
    workflow: &dyn WorkflowOptions,
    args: &[String],
    cwd: PathBuf,
) -> Result<String, ConfigError> {
    let driver = ConfigureDriver::new(workflow);
    let parsed = match parse_args(driver.group(), args)? {
        CliCommand::Help => {
            return Ok(cli_help_lines(driver.group(), &driver.defaults_for_help()).join("\n"))
        }
        CliCommand::Configure(parsed) => parsed,
    };

    let resolved = driver.configure(&ConfigureRequest {
        overrides_file: parsed.overrides_file,
        cli: parsed.values,
        cwd,
    })?;

    let mut lines = vec![format!("run_dir={}", resolved.run_dir().display())];
    if parsed.write {
        let path = write_run_config(&resolved)?;
        lines.push(format!("run_config={}", path.display()));
    } else {
        lines.extend(
            resolved
                .options
                .iter()
                .map(|(name, value)| format!("{name}={value}")),
        );
    }
    Ok(lines.join("\n"))
}
