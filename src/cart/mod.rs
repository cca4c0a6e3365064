//! Shopping cart.
//!
//! The cart is never persisted. It is filled while someone is logged in and
//! emptied by checkout, by an explicit clear, and by logout.

mod item;
mod manager;

pub use item::{CartItem, Receipt};
pub use manager::{Cart, CartOutcome};
