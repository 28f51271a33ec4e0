//! The document context that owns a lifecycle stage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Stage, Transition};
use crate::narration::NarrationSink;

/// A document walking the Draft -> Moderation -> Published lifecycle.
///
/// The document owns its stage exclusively; the only way to advance it is
/// [`Document::publish`]. Every publish is recorded in the document's history,
/// including the no-op publishes at the terminal stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    stage: Stage,
    #[serde(default)]
    history: Vec<Transition>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new document in the `Draft` stage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a new draft document with a caller-supplied identity.
    #[must_use]
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            stage: Stage::Draft,
            history: Vec::new(),
        }
    }

    /// Returns the document's identity.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the display name of the current stage.
    #[must_use]
    pub fn stage_name(&self) -> &'static str {
        self.stage.name()
    }

    /// Returns true once the document has reached the terminal stage.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Returns every transition this document has gone through, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Requests publication, advancing the stage per the transition rule.
    ///
    /// Total over all stages: at `Published` the stage is left unchanged and
    /// the returned transition is a no-op.
    pub fn publish(&mut self) -> &Transition {
        let transition = Transition::evaluate(self.stage);
        tracing::info!(
            document_id = %self.id,
            from = %transition.from,
            to = %transition.to,
            "publish requested"
        );
        self.stage = transition.to;
        self.history.push(transition);
        // Just pushed, so last() is always Some.
        match self.history.last() {
            Some(transition) => transition,
            None => unreachable!(),
        }
    }

    /// Like [`Document::publish`], additionally narrating the transition
    /// message through `sink`.
    pub fn publish_into(&mut self, sink: &dyn NarrationSink) -> &Transition {
        let transition = self.publish();
        sink.emit(&transition.message);
        transition
    }
}
