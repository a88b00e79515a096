//! Vizij Sine Wave Core (host-agnostic)
//!
//! Synthesizes a sinusoidal motion curve on a keyable attribute: one key per
//! integer frame, padded by extra samples on each side so the boundary
//! tangents are shaped by real neighbours, then trimmed back to the requested
//! range with the end-frame tangent frozen at its padded value.
//!
//! The host application's animation-curve store is reached only through the
//! [`AnimationHost`] trait. [`InMemoryHost`] is a reference implementation used
//! by tests and headless tools.

pub mod commands;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod host;
pub mod ids;
pub mod keyer;

// Re-exports for consumers (adapters)
pub use commands::{dispatch, parse_command_json, Command, CommandRequest, Selection};
pub use config::{BoundaryTangents, Config, PADDING_FRAMES};
pub use curve::{AnimCurve, InMemoryHost};
pub use data::{sample_wave, Keyframe, Tangents, WaveParameters};
pub use error::{GenerationError, HostError};
pub use host::AnimationHost;
pub use ids::{Frame, FrameRange, Target};
pub use keyer::{clear_all, clear_section, generate, Keyer};
