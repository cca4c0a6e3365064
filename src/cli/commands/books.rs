//! Catalog listing: `books` and `genres`.

use crate::catalog::{Book, BookFilter};
use crate::cli::args::BooksArgs;
use crate::error::Result;
use crate::state::AppState;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ShelfContext};

/// One catalog line with like count and markers.
fn book_line<S: KeyValueStore>(book: &Book, state: &AppState<S>) -> String {
    let mut line = format!(
        "{:>3}  {} by {} ({})  ♥ {}",
        book.id,
        book.title,
        book.author,
        book.genre,
        state.like_count(book.id)
    );
    if state.has_liked(book.id) {
        line.push_str("  liked");
    }
    if state.is_in_cart(book.id) {
        line.push_str("  [Added]");
    }
    line
}

/// The books command implementation.
pub struct BooksCommand {
    args: BooksArgs,
}

impl BooksCommand {
    /// Create a new books command.
    pub fn new(args: BooksArgs) -> Self {
        Self { args }
    }

    fn filter(&self) -> BookFilter {
        let mut filter = BookFilter::new();
        if let Some(query) = &self.args.search {
            filter = filter.with_query(query.as_str());
        }
        if let Some(genre) = &self.args.genre {
            filter = filter.with_genre(genre.as_str());
        }
        filter
    }
}

impl Command for BooksCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Book Catalog");

        let books = ctx.catalog.filter(&self.filter());
        if books.is_empty() {
            ui.warning("No books match your search");
            return Ok(CommandResult::success());
        }

        for book in books {
            ui.message(&book_line(book, &ctx.state));
            if ui.output_mode().shows_details() {
                let likers = ctx.state.likes().likers(book.id);
                if !likers.is_empty() {
                    ui.message(&format!("       liked by {}", likers.join(", ")));
                }
            }
        }

        if ctx.state.session().is_none() && ui.output_mode().shows_headers() {
            ui.message("");
            ui.message("Login to add to cart");
        }
        Ok(CommandResult::success())
    }
}

/// The genres command implementation.
pub struct GenresCommand;

impl Command for GenresCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Genres");
        for genre in ctx.catalog.genres() {
            ui.message(genre);
        }
        Ok(CommandResult::success())
    }
}
