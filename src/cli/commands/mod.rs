//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands and shell lines to their implementations. This allows:
//! - One-shot subcommands (`bookshelf like 3`)
//! - A long-lived `bookshelf shell` sharing the same commands
//! - Consistent global flag handling

pub mod account;
pub mod books;
pub mod cart;
pub mod completions;
pub mod dispatcher;
pub mod like;
pub mod shell;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ShelfContext};
pub use shell::run_shell;
