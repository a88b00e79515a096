//! Sine sampling, keying and the boundary-tangent fix-up.
//!
//! `generate` runs in two phases against the host:
//! 1. key every frame of the padded range `[start - pad, end + pad]`;
//! 2. read the end-frame tangents (and start-frame ones under
//!    [`BoundaryTangents::Both`]), delete the padding keys, and pin the
//!    captured tangents back so the host's post-trim recomputation is undone.
//!
//! A host failure aborts immediately. Keys written before the failure stay.

use log::{debug, trace};

use crate::config::Config;
use crate::data::{sample_wave, WaveParameters};
use crate::error::GenerationError;
use crate::host::AnimationHost;
use crate::ids::{Frame, FrameRange, Target};

fn check_target(target: &Target) -> Result<(), GenerationError> {
    if target.object.is_empty() {
        return Err(GenerationError::NoTargetSelected);
    }
    if target.attribute.is_empty() {
        return Err(GenerationError::NoAttributeSelected);
    }
    Ok(())
}

/// Stateless operations parameterised by a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Keyer {
    config: Config,
}

impl Keyer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Key a sine wave over `params.start_frame..=params.end_frame`.
    ///
    /// Fails with [`GenerationError::InvalidRange`] or
    /// [`GenerationError::InvalidParameters`] before any host call; the range
    /// is checked ahead of the target. A padded range that would leave the
    /// `Frame` domain is an `InvalidRange`.
    pub fn generate<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        target: &Target,
        params: &WaveParameters,
    ) -> Result<(), GenerationError> {
        let span = params.padded_range(self.config.padding_frames)?;
        check_target(target)?;

        let pad = Frame::from(self.config.padding_frames);
        let (start, end) = (params.start_frame, params.end_frame);
        debug!(
            "generate {target} over {}: wavelength={} phase={}deg amplitude={} offset={} pad={pad}",
            params.range(),
            params.wavelength,
            params.phase_degrees,
            params.amplitude,
            params.offset
        );

        for key in sample_wave(params, self.config.padding_frames) {
            trace!("key {target} @{} = {}", key.frame, key.value);
            host.set_keyframe(target, key.frame, key.value)?;
        }

        let end_tangents = host.get_tangents(target, end)?;
        let start_tangents = if self.config.boundary_tangents.restores_start() {
            Some(host.get_tangents(target, start)?)
        } else {
            None
        };

        if pad > 0 {
            host.delete_keyframes(target, FrameRange::new(span.start, start - 1))?;
            host.delete_keyframes(target, FrameRange::new(end + 1, span.end))?;
        }

        host.set_tangents(target, end, end_tangents)?;
        if let Some(t) = start_tangents {
            host.set_tangents(target, start, t)?;
        }

        debug!(
            "generate {target}: keyed {} frames, end tangents in={} out={}",
            params.range().len(),
            end_tangents.in_angle,
            end_tangents.out_angle
        );
        Ok(())
    }

    /// Delete every key on the target attribute.
    pub fn clear_all<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        target: &Target,
    ) -> Result<(), GenerationError> {
        check_target(target)?;
        debug!("clear_all {target}");
        host.delete_keyframes_all(target)?;
        Ok(())
    }

    /// Delete keys whose frame lies in `[start_frame, end_frame]`.
    /// A reversed range deletes nothing.
    pub fn clear_section<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        target: &Target,
        start_frame: Frame,
        end_frame: Frame,
    ) -> Result<(), GenerationError> {
        check_target(target)?;
        let range = FrameRange::new(start_frame, end_frame);
        if range.is_empty() {
            debug!("clear_section {target}: empty range {range}, nothing to do");
            return Ok(());
        }
        debug!("clear_section {target} {range}");
        host.delete_keyframes(target, range)?;
        Ok(())
    }
}

/// [`Keyer::generate`] with the default [`Config`].
pub fn generate<H: AnimationHost + ?Sized>(
    host: &mut H,
    target: &Target,
    params: &WaveParameters,
) -> Result<(), GenerationError> {
    Keyer::default().generate(host, target, params)
}

/// [`Keyer::clear_all`] with the default [`Config`].
pub fn clear_all<H: AnimationHost + ?Sized>(
    host: &mut H,
    target: &Target,
) -> Result<(), GenerationError> {
    Keyer::default().clear_all(host, target)
}

/// [`Keyer::clear_section`] with the default [`Config`].
pub fn clear_section<H: AnimationHost + ?Sized>(
    host: &mut H,
    target: &Target,
    start_frame: Frame,
    end_frame: Frame,
) -> Result<(), GenerationError> {
    Keyer::default().clear_section(host, target, start_frame, end_frame)
}
