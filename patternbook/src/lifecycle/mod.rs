//! The State pattern walkthrough: a document lifecycle state machine.
//!
//! Instead of one class per state with virtual dispatch, the closed set of
//! stages is a tagged enum and the transition behavior is a single pure
//! function, [`next_stage`]. The [`Document`] context applies the returned
//! stage itself, so no state ever holds a back-reference to its container.

mod document;
mod stage;
mod transition;

pub use document::Document;
pub use stage::Stage;
pub use transition::{next_stage, Transition};
