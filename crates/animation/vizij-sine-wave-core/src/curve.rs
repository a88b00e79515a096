//! In-memory animation curves and a reference [`AnimationHost`].
//!
//! Auto tangents are derived on query from the neighbouring keys, so deleting
//! a neighbour changes the tangent a later query reports. Interior keys take
//! the slope between their neighbours; edge keys and lone keys are flat.

use std::collections::BTreeMap;
use std::ops::Bound;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::{Keyframe, Tangents};
use crate::error::HostError;
use crate::host::AnimationHost;
use crate::ids::{Frame, FrameRange, Target};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
enum TangentMode {
    Auto,
    Fixed(Tangents),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
struct CurveKey {
    value: f64,
    tangents: TangentMode,
}

/// Slope of the line through two keys, as a tangent angle in degrees.
fn slope_angle(prev: (Frame, f64), next: (Frame, f64)) -> f64 {
    let dt = (next.0 - prev.0) as f64;
    if dt <= 0.0 {
        return 0.0;
    }
    ((next.1 - prev.1) / dt).atan().to_degrees()
}

/// A single attribute's keys, ordered by frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimCurve {
    keys: BTreeMap<Frame, CurveKey>,
}

impl AnimCurve {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.keys.keys().copied()
    }

    /// Insert or replace a key. Replaced keys return to auto tangents.
    pub fn set_key(&mut self, frame: Frame, value: f64) {
        self.keys.insert(
            frame,
            CurveKey {
                value,
                tangents: TangentMode::Auto,
            },
        );
    }

    pub fn value(&self, frame: Frame) -> Option<f64> {
        self.keys.get(&frame).map(|k| k.value)
    }

    /// Evaluated tangents at `frame`: pinned ones if set, auto otherwise.
    pub fn tangents(&self, frame: Frame) -> Option<Tangents> {
        let key = self.keys.get(&frame)?;
        match key.tangents {
            TangentMode::Fixed(t) => Some(t),
            TangentMode::Auto => Some(self.auto_tangents(frame)),
        }
    }

    /// True when the key at `frame` carries pinned tangents.
    pub fn is_pinned(&self, frame: Frame) -> bool {
        matches!(
            self.keys.get(&frame).map(|k| k.tangents),
            Some(TangentMode::Fixed(_))
        )
    }

    /// Pin explicit tangents. Returns false when no key exists at `frame`.
    pub fn pin_tangents(&mut self, frame: Frame, tangents: Tangents) -> bool {
        match self.keys.get_mut(&frame) {
            Some(key) => {
                key.tangents = TangentMode::Fixed(tangents);
                true
            }
            None => false,
        }
    }

    /// Remove keys in the inclusive range; returns how many were removed.
    pub fn remove_range(&mut self, range: FrameRange) -> usize {
        if range.is_empty() {
            return 0;
        }
        let doomed: Vec<Frame> = self
            .keys
            .range(range.start..=range.end)
            .map(|(f, _)| *f)
            .collect();
        for f in &doomed {
            self.keys.remove(f);
        }
        doomed.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Snapshot of every key with its evaluated tangents.
    pub fn keyframes(&self) -> Vec<Keyframe> {
        self.keys
            .iter()
            .map(|(frame, key)| {
                let tangents = match key.tangents {
                    TangentMode::Fixed(t) => t,
                    TangentMode::Auto => self.auto_tangents(*frame),
                };
                Keyframe::new(*frame, key.value).with_tangents(tangents)
            })
            .collect()
    }

    fn auto_tangents(&self, frame: Frame) -> Tangents {
        let prev = self.keys.range(..frame).next_back();
        let next = self
            .keys
            .range((Bound::Excluded(frame), Bound::Unbounded))
            .next();
        match (prev, next) {
            (Some((pf, pk)), Some((nf, nk))) => {
                Tangents::smooth(slope_angle((*pf, pk.value), (*nf, nk.value)))
            }
            _ => Tangents::smooth(0.0),
        }
    }
}

/// Reference host keeping one [`AnimCurve`] per target.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHost {
    curves: HashMap<Target, AnimCurve>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curve(&self, target: &Target) -> Option<&AnimCurve> {
        self.curves.get(target)
    }

    /// Keys on `target` in frame order; empty when the attribute is unanimated.
    pub fn keyframes(&self, target: &Target) -> Vec<Keyframe> {
        self.curves
            .get(target)
            .map(AnimCurve::keyframes)
            .unwrap_or_default()
    }

    pub fn insert_curve(&mut self, target: Target, curve: AnimCurve) {
        self.curves.insert(target, curve);
    }

    fn missing(target: &Target, frame: Frame) -> HostError {
        HostError::MissingKeyframe {
            target: target.clone(),
            frame,
        }
    }
}

impl AnimationHost for InMemoryHost {
    fn set_keyframe(&mut self, target: &Target, frame: Frame, value: f64) -> Result<(), HostError> {
        if !value.is_finite() {
            return Err(HostError::NonFiniteValue { frame, value });
        }
        self.curves
            .entry(target.clone())
            .or_default()
            .set_key(frame, value);
        Ok(())
    }

    fn get_tangents(&self, target: &Target, frame: Frame) -> Result<Tangents, HostError> {
        self.curves
            .get(target)
            .and_then(|c| c.tangents(frame))
            .ok_or_else(|| Self::missing(target, frame))
    }

    fn set_tangents(
        &mut self,
        target: &Target,
        frame: Frame,
        tangents: Tangents,
    ) -> Result<(), HostError> {
        let pinned = self
            .curves
            .get_mut(target)
            .map(|c| c.pin_tangents(frame, tangents))
            .unwrap_or(false);
        if pinned {
            Ok(())
        } else {
            Err(Self::missing(target, frame))
        }
    }

    fn delete_keyframes(&mut self, target: &Target, range: FrameRange) -> Result<(), HostError> {
        if let Some(curve) = self.curves.get_mut(target) {
            curve.remove_range(range);
        }
        Ok(())
    }

    fn delete_keyframes_all(&mut self, target: &Target) -> Result<(), HostError> {
        if let Some(curve) = self.curves.get_mut(target) {
            curve.clear();
        }
        Ok(())
    }
}
