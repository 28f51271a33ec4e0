//! Narration sink trait and implementations.

use tracing::{debug, info, Level};

/// Trait for sinks that receive narration lines.
///
/// The walkthroughs narrate their own execution one human-readable line at a
/// time. Everything is synchronous; emitting must never fail or block.
pub trait NarrationSink: Send + Sync {
    /// Emits one narration line.
    fn emit(&self, line: &str);
}

/// A sink that discards all narration.
///
/// Used as the default when nobody is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NarrationSink for NoOpSink {
    fn emit(&self, _line: &str) {
        // Intentionally empty - discards all narration
    }
}

/// A sink that prints each line to stdout.
///
/// This is the demos' surface: the narration the original scripts `echo`d.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl NarrationSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// A sink that forwards narration to the tracing framework.
#[derive(Debug, Clone)]
pub struct TracingSink {
    /// The log level to use.
    level: Level,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl TracingSink {
    /// Creates a new tracing sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level tracing sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Creates an info-level tracing sink.
    #[must_use]
    pub fn info() -> Self {
        Self::new(Level::INFO)
    }
}

impl NarrationSink for TracingSink {
    fn emit(&self, line: &str) {
        match self.level {
            Level::DEBUG => debug!(narration = %line, "{}", line),
            _ => info!(narration = %line, "{}", line),
        }
    }
}

/// A collecting narration sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: parking_lot::RwLock<Vec<String>>,
}

impl CollectingSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected lines in emission order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    /// Returns the number of collected lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.read().len()
    }

    /// Returns true if no lines have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }

    /// Clears all collected lines.
    pub fn clear(&self) {
        self.lines.write().clear();
    }
}

impl NarrationSink for CollectingSink {
    fn emit(&self, line: &str) {
        self.lines.write().push(line.to_string());
    }
}
