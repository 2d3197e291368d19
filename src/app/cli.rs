use crate::options::{OptionError, OptionGroup, OptionKind, OptionMap};
use std::path::PathBuf;

pub const CONFIG_OPTION: &str = "config";
pub const NO_WRITE_FLAG: &str = "--no-write";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Configure(ConfigureArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureArgs {
    pub overrides_file: Option<PathBuf>,
    pub values: OptionMap,
    pub write: bool,
}

/// Reads `--name value` and `--name=value` pairs for every registered option.
pub fn parse_args(group: &OptionGroup, args: &[String]) -> Result<CliCommand, OptionError> {
    let mut parsed = ConfigureArgs {
        overrides_file: None,
        values: OptionMap::new(),
        write: true,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            NO_WRITE_FLAG => {
                parsed.write = false;
                continue;
            }
            _ => {}
        }

        let Some(flag) = arg.strip_prefix("--") else {
            return Err(OptionError::UnexpectedArgument { value: arg.clone() });
        };
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        if name == CONFIG_OPTION {
            let value = inline.or_else(|| iter.next().cloned()).ok_or_else(|| {
                OptionError::MissingValue {
                    name: name.to_string(),
                }
            })?;
            parsed.overrides_file = Some(PathBuf::from(value));
            continue;
        }

        let spec = group.find(name).ok_or_else(|| OptionError::Unknown {
            name: name.to_string(),
        })?;
        let raw = match (spec.kind, inline) {
            (_, Some(value)) => Some(value),
            (OptionKind::Flag, None) => None,
            (_, None) => iter.next().cloned(),
        };
        let value = group.parse_value(name, raw.as_deref())?;
        parsed.values.insert(name, value);
    }

    Ok(CliCommand::Configure(parsed))
}

pub fn cli_help_lines(group: &OptionGroup, defaults: &OptionMap) -> Vec<String> {
    let mut lines = vec![
        "Usage: configure-manta --runDir=RUNDIR [options]".to_string(),
        String::new(),
        "Options:".to_string(),
        format!("  {0:28} Show this help and exit", "-h, --help"),
        format!(
            "  {0:28} YAML file of option overrides applied before command-line values",
            "--config=FILE"
        ),
        format!(
            "  {0:28} Resolve and validate without writing the run config",
            NO_WRITE_FLAG
        ),
        String::new(),
    ];
    lines.extend(group.help_lines(defaults));
    lines
}
