//! Book likes.
//!
//! Toggle-only: the same call likes and unlikes. The full registry is
//! rewritten under the `likes` key on every toggle.

mod registry;

pub use registry::{LikeOutcome, LikeRegistry};
