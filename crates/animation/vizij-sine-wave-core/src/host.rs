//! Contract between the keyer and the host's animation-curve store.
//!
//! Calls are synchronous and assumed uncontended for the duration of one
//! operation; the keyer issues them in a fixed order and never retries.

use crate::data::Tangents;
use crate::error::HostError;
use crate::ids::{Frame, FrameRange, Target};

pub trait AnimationHost {
    /// Create or replace the key at `frame`.
    fn set_keyframe(&mut self, target: &Target, frame: Frame, value: f64) -> Result<(), HostError>;

    /// Tangent angles the host currently evaluates for the key at `frame`.
    fn get_tangents(&self, target: &Target, frame: Frame) -> Result<Tangents, HostError>;

    /// Pin explicit tangent angles on the key at `frame`.
    fn set_tangents(
        &mut self,
        target: &Target,
        frame: Frame,
        tangents: Tangents,
    ) -> Result<(), HostError>;

    /// Delete every key whose frame lies in `range` (inclusive).
    fn delete_keyframes(&mut self, target: &Target, range: FrameRange) -> Result<(), HostError>;

    /// Delete every key on the attribute.
    fn delete_keyframes_all(&mut self, target: &Target) -> Result<(), HostError>;
}

impl<H: AnimationHost + ?Sized> AnimationHost for &mut H {
    fn set_keyframe(&mut self, target: &Target, frame: Frame, value: f64) -> Result<(), HostError> {
        (**self).set_keyframe(target, frame, value)
    }

    fn get_tangents(&self, target: &Target, frame: Frame) -> Result<Tangents, HostError> {
        (**self).get_tangents(target, frame)
    }

    fn set_tangents(
        &mut self,
        target: &Target,
        frame: Frame,
        tangents: Tangents,
    ) -> Result<(), HostError> {
        (**self).set_tangents(target, frame, tangents)
    }

    fn delete_keyframes(&mut self, target: &Target, range: FrameRange) -> Result<(), HostError> {
        (**self).delete_keyframes(target, range)
    }

    fn delete_keyframes_all(&mut self, target: &Target) -> Result<(), HostError> {
        (**self).delete_keyframes_all(target)
    }
}
