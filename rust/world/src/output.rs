//! What the game says back, and who it says it to.

use serde::{Deserialize, Serialize};

use crate::world::LocationId;

/// How a line should be presented.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Story text and game messages.
    Narrative,
    /// Command lists and hints.
    Help,
    /// The command could not be carried out.
    Error,
    /// The player's own input, echoed back.
    Echo,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn narrative(text: impl Into<String>) -> Self {
        Self::new(LineKind::Narrative, text)
    }

    pub fn help(text: impl Into<String>) -> Self {
        Self::new(LineKind::Help, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self::new(LineKind::Echo, text)
    }
}

/// The presentation side of the game.
///
/// Implementors only consume; nothing they do feeds back into game state.
pub trait Presenter {
    fn write_line(&mut self, line: &OutputLine);

    /// Called whenever the gunslinger ends up somewhere new.
    fn location_changed(&mut self, _location: LocationId) {}
}

/// A presenter that keeps every line, for callers that want a `Vec` back.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<OutputLine>,
    pub locations: Vec<LocationId>,
}

impl Presenter for Transcript {
    fn write_line(&mut self, line: &OutputLine) {
        self.lines.push(line.clone());
    }

    fn location_changed(&mut self, location: LocationId) {
        self.locations.push(location);
    }
}

/// Per-command sink handed to the handlers.
pub(crate) struct Out<'a> {
    presenter: &'a mut dyn Presenter,
}

impl<'a> Out<'a> {
    pub(crate) fn new(presenter: &'a mut dyn Presenter) -> Self {
        Self { presenter }
    }

    pub(crate) fn line(&mut self, line: OutputLine) {
        self.presenter.write_line(&line);
    }

    pub(crate) fn say(&mut self, text: impl Into<String>) {
        self.line(OutputLine::narrative(text));
    }

    pub(crate) fn help(&mut self, text: impl Into<String>) {
        self.line(OutputLine::help(text));
    }

    pub(crate) fn error(&mut self, text: impl Into<String>) {
        self.line(OutputLine::error(text));
    }

    pub(crate) fn moved(&mut self, location: LocationId) {
        self.presenter.location_changed(location);
    }
}
