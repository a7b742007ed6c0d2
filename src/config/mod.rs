mod configuration;
mod options;

pub use configuration::{ConfigError, Configuration};
pub use options::{OptionKind, OptionSpec, OptionValue, ProfileCallback};
