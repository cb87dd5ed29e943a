//! Caller-side acceptance of recognition results.
//!
//! The recognizer always reports its best template with a raw score. Whether
//! that score is good enough is decided here, against a fixed threshold.

use crate::recognizer::Match;
use crate::util::{GestureError, GestureResult};
use std::fmt;

/// Why a recognition result was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The stroke had fewer than two usable points.
    PathTooShort,
    /// The stroke had no spatial extent.
    Degenerate,
    /// No template was registered.
    NoTemplates,
    /// No template produced a match.
    NoMatch,
    /// The best template scored below the threshold.
    BelowThreshold,
    /// The recognizer was misconfigured.
    InvalidConfig,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PathTooShort => "Path too short",
            Self::Degenerate => "Degenerate path",
            Self::NoTemplates => "No templates loaded",
            Self::NoMatch => "No match found",
            Self::BelowThreshold => "Score below threshold",
            Self::InvalidConfig => "Invalid recognizer config",
        };
        f.write_str(text)
    }
}

impl From<&GestureError> for RejectReason {
    fn from(err: &GestureError) -> Self {
        match err {
            GestureError::InsufficientPoints { .. } => Self::PathTooShort,
            GestureError::DegenerateStroke { .. } => Self::Degenerate,
            GestureError::EmptyRegistry => Self::NoTemplates,
            GestureError::NoMatch => Self::NoMatch,
            GestureError::InvalidConfig(_) => Self::InvalidConfig,
        }
    }
}

/// A rejected result with the closest template, when one was found.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejection {
    /// Why the result was rejected.
    pub reason: RejectReason,
    /// Best template name and score, kept for diagnostics.
    pub closest: Option<(String, f64)>,
}

/// Outcome of applying an [`AcceptancePolicy`].
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The best template cleared the threshold.
    Accepted { name: String, score: f64 },
    /// The result was rejected.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns the accepted template name, if any.
    pub fn accepted_name(&self) -> Option<&str> {
        match self {
            Self::Accepted { name, .. } => Some(name.as_str()),
            Self::Rejected(_) => None,
        }
    }
}

/// Minimum score a match needs to be accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceptancePolicy {
    /// Inclusive score threshold.
    pub threshold: f64,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self { threshold: 0.85 }
    }
}

impl AcceptancePolicy {
    /// Creates a policy with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Accepts or rejects a recognition result.
    pub fn judge(&self, result: &GestureResult<Match>) -> Verdict {
        match result {
            Ok(m) if m.score >= self.threshold => Verdict::Accepted {
                name: m.name.clone(),
                score: m.score,
            },
            Ok(m) => Verdict::Rejected(Rejection {
                reason: RejectReason::BelowThreshold,
                closest: Some((m.name.clone(), m.score)),
            }),
            Err(err) => Verdict::Rejected(Rejection {
                reason: err.into(),
                closest: None,
            }),
        }
    }
}
