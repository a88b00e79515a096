//! Error types for wave generation and host access

use serde::{Deserialize, Serialize};

use crate::ids::{Frame, Target};

/// Failures reported by an [`AnimationHost`](crate::host::AnimationHost).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HostError {
    /// No key exists at the addressed frame
    #[error("No keyframe on {target} at frame {frame}")]
    MissingKeyframe { target: Target, frame: Frame },

    /// Value cannot be stored on a curve
    #[error("Non-finite value {value} at frame {frame}")]
    NonFiniteValue { frame: Frame, value: f64 },

    /// Host refused the operation
    #[error("Host rejected operation: {reason}")]
    Rejected { reason: String },
}

/// Errors surfaced by generate / clear operations and command dispatch.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GenerationError {
    /// Start frame is not before end frame
    #[error("Invalid frame range: start {start} must be before end {end}")]
    InvalidRange { start: Frame, end: Frame },

    /// Wave shape cannot be sampled
    #[error("Invalid wave parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("No target object selected")]
    NoTargetSelected,

    #[error("No attribute selected")]
    NoAttributeSelected,

    /// A host read or write failed; earlier writes are not rolled back
    #[error("Host operation failed: {0}")]
    HostWrite(#[from] HostError),
}

impl GenerationError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } | Self::InvalidParameters { .. } => "validation",
            Self::NoTargetSelected | Self::NoAttributeSelected => "selection",
            Self::HostWrite(_) => "host",
        }
    }

    /// True when the error was raised before any host mutation.
    #[inline]
    pub fn is_pre_mutation(&self) -> bool {
        !matches!(self, Self::HostWrite(_))
    }
}
