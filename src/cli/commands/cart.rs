//! Cart commands, available inside the shell: `add`, `cart`, `checkout`, `clear`.

use crate::catalog::BookId;
use crate::cart::CartOutcome;
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ShelfContext};

/// Adds a book to the cart.
pub struct AddCommand {
    id: BookId,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(id: BookId) -> Self {
        Self { id }
    }
}

impl Command for AddCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let book = ctx.catalog.get(self.id)?;

        match ctx.state.add_to_cart(book) {
            CartOutcome::Added => ui.success(&format!(
                "Added \"{}\" to cart ({} item(s))",
                book.title,
                ctx.state.cart().len()
            )),
            CartOutcome::AlreadyInCart => {
                ui.warning(&format!("\"{}\" is already in your cart", book.title))
            }
            outcome @ CartOutcome::Unauthenticated => {
                ui.warning(outcome.prompt().unwrap_or_default())
            }
        }
        Ok(CommandResult::success())
    }
}

/// Shows the cart.
pub struct CartCommand;

impl Command for CartCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Your Cart");

        let items = ctx.state.cart();
        if items.is_empty() {
            ui.message("Your cart is empty.");
            return Ok(CommandResult::success());
        }

        for item in items {
            ui.message(&format!("{:>3}  {}  [{}]", item.id, item.title, item.genre));
        }
        ui.message(&format!("{} item(s)", items.len()));
        Ok(CommandResult::success())
    }
}

/// Pays for and empties the cart.
pub struct CheckoutCommand;

impl Command for CheckoutCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let Some(receipt) = ctx.state.checkout() else {
            ui.warning("Your cart is empty.");
            return Ok(CommandResult::success());
        };

        if ui.output_mode().shows_details() {
            for item in &receipt.items {
                ui.message(&format!("  {} by {}", item.title, item.author));
            }
            ui.message(&format!(
                "Paid at {}",
                receipt.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        ui.success(&format!("Payment successful! ({} item(s))", receipt.len()));
        Ok(CommandResult::success())
    }
}

/// Empties the cart.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ctx.state.clear_cart();
        ui.success("Cart cleared");
        Ok(CommandResult::success())
    }
}
