//! Narration plumbing shared by all three walkthroughs.
//!
//! Each walkthrough emits human-readable lines describing what it just did.
//! Sinks decide where those lines go: stdout for the demos, tracing for
//! structured logs, a collector for tests.

mod sink;

pub use sink::{CollectingSink, NarrationSink, NoOpSink, StdoutSink, TracingSink};
