//! Implementations of the CLI subcommands.

pub mod add;
pub mod list;
pub mod show;
