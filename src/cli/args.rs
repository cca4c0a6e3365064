//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct; lines typed into the
//! interactive shell are parsed with [`ShellLine`].

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::BookId;

/// Bookshelf - Browse books, keep a cart, like your favorites.
#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding accounts, session and likes
    #[arg(long, global = true, env = "BOOKSHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (overrides default <config_dir>/bookshelf/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a YAML or JSON catalog (overrides the built-in books)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account
    Register(CredentialArgs),

    /// Log in to an existing account
    Login(CredentialArgs),

    /// Log out and empty the cart
    Logout,

    /// Show who is logged in
    Whoami,

    /// List the catalog (default if no command specified)
    Books(BooksArgs),

    /// List the catalog's genres
    Genres,

    /// Like a book, or remove your like
    Like(BookArgs),

    /// Start an interactive session where the cart is available
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Email and optional password.
#[derive(Debug, Clone, clap::Args)]
pub struct CredentialArgs {
    /// Account email
    pub email: String,

    /// Account password (prompted for when omitted)
    pub password: Option<String>,
}

/// Arguments for the `books` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BooksArgs {
    /// Only titles containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only books of this genre
    #[arg(short, long)]
    pub genre: Option<String>,
}

/// A single book id.
#[derive(Debug, Clone, clap::Args)]
pub struct BookArgs {
    /// Book id as shown by `books`
    pub id: BookId,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(no_binary_name = true, disable_help_subcommand = true)]
#[command(disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside the interactive shell.
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Create an account
    Register(CredentialArgs),

    /// Log in to an existing account
    Login(CredentialArgs),

    /// Log out and empty the cart
    Logout,

    /// Show who is logged in
    Whoami,

    /// List the catalog
    Books(BooksArgs),

    /// List the catalog's genres
    Genres,

    /// Like a book, or remove your like
    Like(BookArgs),

    /// Add a book to the cart
    Add(BookArgs),

    /// Show the cart
    Cart,

    /// Pay for everything in the cart
    Checkout,

    /// Empty the cart
    Clear,

    /// Show available commands
    Help,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_register_with_password() {
        let cli = Cli::try_parse_from(["bookshelf", "register", "a@x.com", "pw"]).unwrap();
        match cli.command {
            Some(Commands::Register(args)) => {
                assert_eq!(args.email, "a@x.com");
                assert_eq!(args.password.as_deref(), Some("pw"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn password_is_optional() {
        let cli = Cli::try_parse_from(["bookshelf", "login", "a@x.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Login(CredentialArgs { password: None, .. }))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "books",
            "--genre",
            "Fiction",
            "--data-dir",
            "/tmp/shelf",
            "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shelf")));
        match cli.command {
            Some(Commands::Books(args)) => assert_eq!(args.genre.as_deref(), Some("Fiction")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn like_requires_numeric_id() {
        assert!(Cli::try_parse_from(["bookshelf", "like", "three"]).is_err());
        assert!(Cli::try_parse_from(["bookshelf", "like", "3"]).is_ok());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn shell_line_parses_without_binary_name() {
        let line = ShellLine::try_parse_from(["add", "2"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Add(BookArgs { id: 2 })));
    }

    #[test]
    fn shell_line_help_and_exit_alias() {
        let line = ShellLine::try_parse_from(["help"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Help));
        let line = ShellLine::try_parse_from(["exit"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Quit));
    }

    #[test]
    fn shell_line_rejects_unknown_words() {
        assert!(ShellLine::try_parse_from(["dance"]).is_err());
    }
}
