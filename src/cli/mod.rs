//! CLI argument parsing and command handling.

mod args;
pub mod commands;
mod validators;

pub use args::{ActivityArgs, Cli, Command, ConfigAction, GlobalArgs, GroupingArgs};
