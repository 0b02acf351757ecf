//! CLI argument parsing and startup configuration.

mod args;

pub use args::{CliArgs, CliConfig, VERSION};
