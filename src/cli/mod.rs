//! Command-line interface.

pub mod args;
pub mod check;
pub mod export;
pub mod init;
pub mod query;

pub use args::{CheckArgs, Cli, Commands, ExportArgs, QueryArgs};
