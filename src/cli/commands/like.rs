//! The `like` command.

use crate::catalog::BookId;
use crate::error::Result;
use crate::likes::LikeOutcome;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ShelfContext};

/// Toggles the current user's like on a book.
pub struct LikeCommand {
    id: BookId,
}

impl LikeCommand {
    /// Create a new like command.
    pub fn new(id: BookId) -> Self {
        Self { id }
    }
}

impl Command for LikeCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let book = ctx.catalog.get(self.id)?;

        match ctx.state.toggle_like(book.id)? {
            LikeOutcome::Liked { count } => {
                ui.success(&format!("Liked \"{}\" (♥ {})", book.title, count));
            }
            LikeOutcome::Unliked { count } => {
                ui.success(&format!("Unliked \"{}\" (♥ {})", book.title, count));
            }
            outcome @ LikeOutcome::Unauthenticated => {
                ui.warning(outcome.prompt().unwrap_or_default());
            }
        }
        Ok(CommandResult::success())
    }
}
