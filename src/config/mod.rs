//! Configuration: the TOML file, stack attributes, and the options resolver.

mod loader;
mod options;
mod types;

pub use loader::ConfigError;
pub use options::{Options, OptionsWarning, RawOptions, Resolved};
pub use types::{AnimationConfig, AttrValue, Config, StackConfig};
