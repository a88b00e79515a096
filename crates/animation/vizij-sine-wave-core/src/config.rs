//! Core configuration for vizij-sine-wave-core.

use serde::{Deserialize, Serialize};

/// Padding samples written on each side of the requested range.
pub const PADDING_FRAMES: u32 = 1;

/// Which boundary tangents are frozen across the padding trim.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BoundaryTangents {
    /// Only the end frame keeps its padded tangent; the start frame is left
    /// with whatever the host recomputes.
    #[default]
    EndOnly,
    /// Both start and end frames keep their padded tangents.
    Both,
}

impl BoundaryTangents {
    #[inline]
    pub fn restores_start(self) -> bool {
        matches!(self, BoundaryTangents::Both)
    }
}

/// Configuration for the keyer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extra samples per side used to shape boundary tangents.
    #[serde(default = "default_padding")]
    pub padding_frames: u32,
    #[serde(default)]
    pub boundary_tangents: BoundaryTangents,
}

fn default_padding() -> u32 {
    PADDING_FRAMES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            padding_frames: PADDING_FRAMES,
            boundary_tangents: BoundaryTangents::default(),
        }
    }
}
