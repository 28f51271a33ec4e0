//! The document lifecycle stage enum.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::UnknownStageError;

/// The lifecycle stage of a document.
///
/// The set of stages is closed and the walk through them is one-directional:
/// `Draft` -> `Moderation` -> `Published`, with `Published` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// The document is being written.
    Draft,
    /// The document awaits review.
    Moderation,
    /// The document is live. Terminal.
    Published,
}

impl Default for Stage {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Stage {
    /// Returns the display name of the stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Moderation => "Moderation",
            Self::Published => "Published",
        }
    }

    /// Returns true if no further publish request can change the stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Published)
    }

    /// Resolves a display name back to a stage.
    ///
    /// This is the only boundary where an unrecognized stage value can enter
    /// the system, so it fails fast instead of guessing.
    pub fn from_name(name: &str) -> Result<Self, UnknownStageError> {
        match name {
            "Draft" => Ok(Self::Draft),
            "Moderation" => Ok(Self::Moderation),
            "Published" => Ok(Self::Published),
            other => Err(UnknownStageError::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Draft.to_string(), "Draft");
        assert_eq!(Stage::Moderation.to_string(), "Moderation");
        assert_eq!(Stage::Published.to_string(), "Published");
    }

    #[test]
    fn test_stage_default_is_draft() {
        assert_eq!(Stage::default(), Stage::Draft);
    }

    #[test]
    fn test_stage_is_terminal() {
        assert!(!Stage::Draft.is_terminal());
        assert!(!Stage::Moderation.is_terminal());
        assert!(Stage::Published.is_terminal());
    }

    #[test]
    fn test_stage_from_name_round_trip() {
        for stage in [Stage::Draft, Stage::Moderation, Stage::Published] {
            assert_eq!(Stage::from_name(stage.name()), Ok(stage));
        }
    }

    #[test]
    fn test_stage_from_name_rejects_unknown() {
        let err = Stage::from_name("Archived").unwrap_err();
        assert_eq!(err.name, "Archived");
    }

    #[test]
    fn test_stage_serialize() {
        let json = serde_json::to_string(&Stage::Moderation).unwrap();
        assert_eq!(json, r#""moderation""#);

        let deserialized: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Stage::Moderation);
    }
}
