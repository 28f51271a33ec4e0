//! # Patternbook
//!
//! Small, synchronous walkthroughs of three classic design patterns, each
//! narrating its own execution:
//!
//! - **State** ([`lifecycle`]): a document lifecycle state machine walking
//!   Draft -> Moderation -> Published, expressed as a tagged enum and one
//!   pure transition function
//! - **Bridge** ([`bridge`]): shapes decoupled from their colors behind a
//!   trait-object seam
//! - **Facade** ([`facade`]): order processing sequenced behind a single
//!   entry point
//!
//! ## Quick Start
//!
//! ```rust
//! use patternbook::prelude::*;
//!
//! let mut doc = Document::new();
//! assert_eq!(doc.stage_name(), "Draft");
//!
//! let transition = doc.publish();
//! assert_eq!(transition.message, "Document moved from Draft to Moderation.");
//! assert_eq!(doc.stage(), Stage::Moderation);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod bridge;
pub mod errors;
pub mod facade;
pub mod lifecycle;
pub mod narration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::{Blue, Circle, Color, Red, Shape, Square};
    pub use crate::errors::{OrderError, PatternbookError, UnknownStageError};
    pub use crate::facade::{Inventory, OrderFacade, PaymentGateway, Shipping};
    pub use crate::lifecycle::{next_stage, Document, Stage, Transition};
    pub use crate::narration::{
        CollectingSink, NarrationSink, NoOpSink, StdoutSink, TracingSink,
    };
}
