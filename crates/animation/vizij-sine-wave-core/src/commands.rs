//! Command contracts for UI shells.
//!
//! A shell collects the current selection plus a fully formed command and
//! hands both to [`dispatch`]. The selection is resolved to a [`Target`] before
//! any host call, so selection errors never mutate the curve.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::data::WaveParameters;
use crate::error::GenerationError;
use crate::host::AnimationHost;
use crate::ids::{Frame, Target};
use crate::keyer::Keyer;

/// Objects selected in the host (selection order) and the chosen attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub attribute: Option<String>,
}

impl Selection {
    pub fn new(objects: Vec<String>, attribute: Option<String>) -> Self {
        Self { objects, attribute }
    }

    /// The most recently selected object.
    pub fn active_object(&self) -> Option<&str> {
        self.objects.last().map(String::as_str)
    }

    pub fn resolve(&self) -> Result<Target, GenerationError> {
        let object = self
            .active_object()
            .filter(|o| !o.is_empty())
            .ok_or(GenerationError::NoTargetSelected)?;
        let attribute = self
            .attribute
            .as_deref()
            .filter(|a| !a.is_empty())
            .ok_or(GenerationError::NoAttributeSelected)?;
        Ok(Target::new(object, attribute))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Generate {
        params: WaveParameters,
    },
    ClearAll,
    ClearSection {
        start_frame: Frame,
        end_frame: Frame,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "generate",
            Command::ClearAll => "clear_all",
            Command::ClearSection { .. } => "clear_section",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub selection: Selection,
    pub command: Command,
}

impl CommandRequest {
    pub fn run<H: AnimationHost + ?Sized>(
        &self,
        host: &mut H,
        keyer: &Keyer,
    ) -> Result<(), GenerationError> {
        dispatch(host, keyer, &self.selection, &self.command)
    }
}

/// Resolve `selection` and run `command` against `host`.
pub fn dispatch<H: AnimationHost + ?Sized>(
    host: &mut H,
    keyer: &Keyer,
    selection: &Selection,
    command: &Command,
) -> Result<(), GenerationError> {
    let result = selection.resolve().and_then(|target| match command {
        Command::Generate { params } => keyer.generate(host, &target, params),
        Command::ClearAll => keyer.clear_all(host, &target),
        Command::ClearSection {
            start_frame,
            end_frame,
        } => keyer.clear_section(host, &target, *start_frame, *end_frame),
    });
    if let Err(err) = &result {
        warn!("{} rejected ({}): {err}", command.name(), err.category());
    }
    result
}

/// Parse a JSON [`CommandRequest`], e.g.
/// `{"selection":{"objects":["ball"],"attribute":"ty"},"command":"ClearAll"}`.
pub fn parse_command_json(s: &str) -> Result<CommandRequest, String> {
    serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))
}
