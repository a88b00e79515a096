//! Identifiers for host-side entities and frame spans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer frame number on the host timeline.
pub type Frame = i64;

/// An (object, attribute) pair in the host scene. Opaque to this crate.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub object: String,
    pub attribute: String,
}

impl Target {
    pub fn new(object: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            attribute: attribute.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.attribute)
    }
}

/// Inclusive frame span `[start, end]`. Empty when `start > end`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: Frame,
    pub end: Frame,
}

impl FrameRange {
    #[inline]
    pub fn new(start: Frame, end: Frame) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn single(frame: Frame) -> Self {
        Self {
            start: frame,
            end: frame,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn contains(&self, frame: Frame) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Number of integer frames covered, saturating at `usize::MAX`.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            let span = self.end.abs_diff(self.start).saturating_add(1);
            usize::try_from(span).unwrap_or(usize::MAX)
        }
    }

    /// Extend both ends outward by `pad` frames, clamped to the `Frame` domain.
    #[inline]
    pub fn padded(&self, pad: Frame) -> Self {
        Self {
            start: self.start.saturating_sub(pad),
            end: self.end.saturating_add(pad),
        }
    }

    /// Extend both ends outward by `pad` frames; `None` if either end overflows.
    #[inline]
    pub fn checked_padded(&self, pad: Frame) -> Option<Self> {
        Some(Self {
            start: self.start.checked_sub(pad)?,
            end: self.end.checked_add(pad)?,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> {
        self.start..=self.end
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
