pub mod contract;
pub mod error;
pub mod group;
pub mod manta;
pub mod sanitize;
pub mod validate;
pub mod value;

pub use contract::WorkflowOptions;
pub use error::OptionError;
pub use group::{OptionGroup, OptionKind, OptionSpec, DEFAULT_PLACEHOLDER, WORKFLOW_GROUP_TITLE};
pub use manta::{MantaWorkflowOptions, RUN_DIR_DESCRIPTION, RUN_DIR_HELP, RUN_DIR_KEY};
pub use sanitize::{absolutize, sanitize_path_option};
pub use validate::assert_option_exists;
pub use value::{OptionMap, OptionValue};
