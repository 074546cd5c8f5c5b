//! Decide whether a description is still template text and swap it when the
//! tracker changes.

mod apply;
mod classify;
mod normalize;

pub use apply::{apply_initial, reconcile_on_tracker_change, Outcome, ReplacementPolicy};
pub use classify::{classify, Classification};
pub use normalize::normalize;
