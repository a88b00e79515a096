//! Wave parameters, keyframes and the pure sine sampler.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::ids::{Frame, FrameRange};

/// In/out tangent angles of a key, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tangents {
    pub in_angle: f64,
    pub out_angle: f64,
}

impl Tangents {
    #[inline]
    pub fn new(in_angle: f64, out_angle: f64) -> Self {
        Self {
            in_angle,
            out_angle,
        }
    }

    /// Same angle on both sides.
    #[inline]
    pub fn smooth(angle: f64) -> Self {
        Self::new(angle, angle)
    }
}

/// A (frame, value) sample, optionally carrying tangent handles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: Frame,
    pub value: f64,
    #[serde(default)]
    pub in_tangent: Option<f64>,
    #[serde(default)]
    pub out_tangent: Option<f64>,
}

impl Keyframe {
    #[inline]
    pub fn new(frame: Frame, value: f64) -> Self {
        Self {
            frame,
            value,
            in_tangent: None,
            out_tangent: None,
        }
    }

    pub fn with_tangents(mut self, tangents: Tangents) -> Self {
        self.in_tangent = Some(tangents.in_angle);
        self.out_tangent = Some(tangents.out_angle);
        self
    }
}

/// Shape and placement of a generated wave.
///
/// `y = amplitude * sin(angular_frequency * (x - start_frame) + phase_radians) + offset`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    pub start_frame: Frame,
    pub end_frame: Frame,
    /// Frames per full cycle.
    pub wavelength: f64,
    pub phase_degrees: f64,
    pub amplitude: f64,
    pub offset: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            start_frame: 1,
            end_frame: 120,
            wavelength: 10.0,
            phase_degrees: 0.0,
            amplitude: 5.0,
            offset: 0.0,
        }
    }
}

impl WaveParameters {
    /// Default shape spanning the host's playback range.
    pub fn reset(playback: FrameRange) -> Self {
        Self {
            start_frame: playback.start,
            end_frame: playback.end,
            ..Self::default()
        }
    }

    #[inline]
    pub fn phase_radians(&self) -> f64 {
        self.phase_degrees * PI / 180.0
    }

    #[inline]
    pub fn angular_frequency(&self) -> f64 {
        TAU / self.wavelength
    }

    #[inline]
    pub fn range(&self) -> FrameRange {
        FrameRange::new(self.start_frame, self.end_frame)
    }

    /// Wave value at `frame`. Frames outside the range are extrapolated.
    #[inline]
    pub fn value_at(&self, frame: Frame) -> f64 {
        let x = (i128::from(frame) - i128::from(self.start_frame)) as f64;
        self.amplitude * (self.angular_frequency() * x + self.phase_radians()).sin() + self.offset
    }

    /// Check the preconditions `generate` enforces before touching the host.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.start_frame >= self.end_frame {
            return Err(GenerationError::InvalidRange {
                start: self.start_frame,
                end: self.end_frame,
            });
        }
        if !self.wavelength.is_finite() || self.wavelength <= 0.0 {
            return Err(GenerationError::InvalidParameters {
                reason: format!("wavelength must be positive and finite, got {}", self.wavelength),
            });
        }
        for (name, v) in [
            ("phase_degrees", self.phase_degrees),
            ("amplitude", self.amplitude),
            ("offset", self.offset),
        ] {
            if !v.is_finite() {
                return Err(GenerationError::InvalidParameters {
                    reason: format!("{name} must be finite, got {v}"),
                });
            }
        }
        Ok(())
    }

    /// Validated range extended by `padding` frames per side.
    ///
    /// Fails with [`GenerationError::InvalidRange`] when the padded range does
    /// not fit in the `Frame` domain.
    pub fn padded_range(&self, padding: u32) -> Result<FrameRange, GenerationError> {
        self.validate()?;
        self.range()
            .checked_padded(Frame::from(padding))
            .ok_or(GenerationError::InvalidRange {
                start: self.start_frame,
                end: self.end_frame,
            })
    }
}

/// Keys `generate` would write, including `padding` extra samples per side.
pub fn sample_wave(params: &WaveParameters, padding: u32) -> Vec<Keyframe> {
    let span = params.range().padded(Frame::from(padding));
    let mut out = Vec::with_capacity(span.len());
    for frame in span.frames() {
        out.push(Keyframe::new(frame, params.value_at(frame)));
    }
    out
}
