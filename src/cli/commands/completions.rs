//! Shell completions generation.
//!
//! The `bookshelf completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::store::KeyValueStore;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult, ShelfContext};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute<S: KeyValueStore>(
        &self,
        _ctx: &mut ShelfContext<S>,
        _ui: &mut dyn UserInterface,
    ) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "bookshelf", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, "bookshelf", &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_completions_cover_subcommands() {
        let output = render(Shell::Bash);
        assert!(output.contains("bookshelf"));
        assert!(output.contains("register"));
        assert!(output.contains("like"));
        assert!(output.contains("--data-dir"));
    }

    #[test]
    fn fish_completions_name_the_binary() {
        let output = render(Shell::Fish);
        assert!(output.contains("complete -c bookshelf"));
    }

    #[test]
    fn execute_succeeds() {
        use crate::catalog::Catalog;
        use crate::state::AppState;
        use crate::store::MemoryStore;
        use crate::ui::MockUI;

        let mut ctx = ShelfContext::new(AppState::load(MemoryStore::new()), Catalog::builtin());
        let mut ui = MockUI::new();
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });

        let result = cmd.execute(&mut ctx, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
    }
}
