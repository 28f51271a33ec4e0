//! The publish transition rule and its record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Stage;

/// Computes the stage a publish request moves to, plus the narration line
/// describing the move.
///
/// This is the whole transition table. It is total: every stage has a defined
/// outcome, and `Published` loops onto itself.
#[must_use]
pub const fn next_stage(current: Stage) -> (Stage, &'static str) {
    match current {
        Stage::Draft => (
            Stage::Moderation,
            "Document moved from Draft to Moderation.",
        ),
        Stage::Moderation => (Stage::Published, "Document approved and published."),
        Stage::Published => (
            Stage::Published,
            "Document is already published. No further changes.",
        ),
    }
}

/// One application of the publish rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The stage the document was in when publish was requested.
    pub from: Stage,
    /// The stage the document ended up in.
    pub to: Stage,
    /// The narration line for this transition.
    pub message: String,
    /// When the transition happened.
    pub occurred_at: DateTime<Utc>,
}

impl Transition {
    /// Evaluates the publish rule against `current` and records the outcome.
    #[must_use]
    pub fn evaluate(current: Stage) -> Self {
        let (to, message) = next_stage(current);
        Self {
            from: current,
            to,
            message: message.to_string(),
            occurred_at: Utc::now(),
        }
    }

    /// Returns true if the transition left the stage unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_stage_walk_is_monotonic() {
        let mut stage = Stage::Draft;
        let mut seen = vec![stage];
        for _ in 0..10 {
            stage = next_stage(stage).0;
            seen.push(stage);
        }

        // Once past a stage, the walk never revisits it.
        assert_eq!(seen[0], Stage::Draft);
        assert_eq!(seen[1], Stage::Moderation);
        assert!(seen[2..].iter().all(|s| *s == Stage::Published));
    }

    #[test]
    fn test_next_stage_messages() {
        assert_eq!(
            next_stage(Stage::Draft).1,
            "Document moved from Draft to Moderation."
        );
        assert_eq!(
            next_stage(Stage::Moderation).1,
            "Document approved and published."
        );
        assert_eq!(
            next_stage(Stage::Published).1,
            "Document is already published. No further changes."
        );
    }

    #[test]
    fn test_terminal_stage_is_idempotent() {
        for _ in 0..3 {
            let (to, message) = next_stage(Stage::Published);
            assert_eq!(to, Stage::Published);
            assert_eq!(message, "Document is already published. No further changes.");
        }
    }

    #[test]
    fn test_transition_evaluate() {
        let transition = Transition::evaluate(Stage::Draft);
        assert_eq!(transition.from, Stage::Draft);
        assert_eq!(transition.to, Stage::Moderation);
        assert!(!transition.is_noop());

        let noop = Transition::evaluate(Stage::Published);
        assert!(noop.is_noop());
    }

    #[test]
    fn test_transition_serialization() {
        let transition = Transition::evaluate(Stage::Moderation);
        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, deserialized);
    }
}
