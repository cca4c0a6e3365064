//! Command-line interface for bookshelf.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and the interactive shell

pub mod args;
pub mod commands;

pub use args::{
    BookArgs, BooksArgs, Cli, Commands, CompletionsArgs, CredentialArgs, ShellCommand, ShellLine,
};
pub use commands::{run_shell, Command, CommandDispatcher, CommandResult, ShelfContext};
