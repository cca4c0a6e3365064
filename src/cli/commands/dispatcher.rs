//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ShelfContext`] holding the state and catalog commands act on
//! - [`CommandDispatcher`] for routing CLI subcommands and shell lines

use crate::catalog::Catalog;
use crate::cli::args::{BooksArgs, Commands, ShellCommand};
use crate::config::ResolvedPaths;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{FileStore, KeyValueStore};
use crate::ui::UserInterface;

use super::account::{LoginCommand, LogoutCommand, RegisterCommand, WhoamiCommand};
use super::books::{BooksCommand, GenresCommand};
use super::cart::{AddCommand, CartCommand, CheckoutCommand, ClearCommand};
use super::completions::CompletionsCommand;
use super::like::LikeCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Application state and catalog to act on
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything a command can touch.
#[derive(Debug)]
pub struct ShelfContext<S: KeyValueStore> {
    /// Accounts, session, cart and likes.
    pub state: AppState<S>,
    /// Books available to browse.
    pub catalog: Catalog,
}

impl<S: KeyValueStore> ShelfContext<S> {
    /// Create a context from loaded state and a catalog.
    pub fn new(state: AppState<S>, catalog: Catalog) -> Self {
        Self { state, catalog }
    }
}

impl ShelfContext<FileStore> {
    /// Open file-backed state and the configured catalog.
    pub fn open(paths: &ResolvedPaths) -> Result<Self> {
        let catalog = match &paths.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };
        let state = AppState::load(FileStore::new(&paths.data_dir));
        Ok(Self::new(state, catalog))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<S: KeyValueStore> {
    ctx: ShelfContext<S>,
}

impl<S: KeyValueStore> CommandDispatcher<S> {
    /// Create a new dispatcher over a context.
    pub fn new(ctx: ShelfContext<S>) -> Self {
        Self { ctx }
    }

    /// Get the context commands run against.
    pub fn context(&self) -> &ShelfContext<S> {
        &self.ctx
    }

    /// Release the context.
    pub fn into_context(self) -> ShelfContext<S> {
        self.ctx
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand lists the catalog.
    pub fn dispatch(
        &mut self,
        command: Option<&Commands>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let ctx = &mut self.ctx;
        match command {
            Some(Commands::Register(args)) => RegisterCommand::new(args.clone()).execute(ctx, ui),
            Some(Commands::Login(args)) => LoginCommand::new(args.clone()).execute(ctx, ui),
            Some(Commands::Logout) => LogoutCommand.execute(ctx, ui),
            Some(Commands::Whoami) => WhoamiCommand.execute(ctx, ui),
            Some(Commands::Books(args)) => BooksCommand::new(args.clone()).execute(ctx, ui),
            Some(Commands::Genres) => GenresCommand.execute(ctx, ui),
            Some(Commands::Like(args)) => LikeCommand::new(args.id).execute(ctx, ui),
            Some(Commands::Shell) => {
                let stdin = std::io::stdin();
                super::shell::run_shell(self, stdin.lock(), ui)
            }
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(ctx, ui)
            }
            None => BooksCommand::new(BooksArgs::default()).execute(ctx, ui),
        }
    }

    /// Dispatch one command typed into the shell.
    ///
    /// `help` and `quit` are handled by the shell loop and do nothing here.
    pub fn dispatch_shell(
        &mut self,
        command: &ShellCommand,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let ctx = &mut self.ctx;
        match command {
            ShellCommand::Register(args) => RegisterCommand::new(args.clone()).execute(ctx, ui),
            ShellCommand::Login(args) => LoginCommand::new(args.clone()).execute(ctx, ui),
            ShellCommand::Logout => LogoutCommand.execute(ctx, ui),
            ShellCommand::Whoami => WhoamiCommand.execute(ctx, ui),
            ShellCommand::Books(args) => BooksCommand::new(args.clone()).execute(ctx, ui),
            ShellCommand::Genres => GenresCommand.execute(ctx, ui),
            ShellCommand::Like(args) => LikeCommand::new(args.id).execute(ctx, ui),
            ShellCommand::Add(args) => AddCommand::new(args.id).execute(ctx, ui),
            ShellCommand::Cart => CartCommand.execute(ctx, ui),
            ShellCommand::Checkout => CheckoutCommand.execute(ctx, ui),
            ShellCommand::Clear => ClearCommand.execute(ctx, ui),
            ShellCommand::Help | ShellCommand::Quit => Ok(CommandResult::success()),
        }
    }
}
