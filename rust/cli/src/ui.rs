//! Terminal output: error and warning lines, and the presenter that prints
//! the game to stdout.

use gunslinger_world::{LineKind, LocationId, OutputLine, Presenter};
use std::io::{self, Write};

pub fn write_error(err: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints game output as plain text lines.
///
/// Echo lines are skipped unless `echo` is set, since a terminal already
/// shows what was typed. The first write failure is kept and reported by
/// [`TerminalPresenter::finish`]; later lines are dropped.
pub struct TerminalPresenter<'a> {
    out: &'a mut dyn Write,
    echo: bool,
    failed: Option<io::Error>,
}

impl<'a> TerminalPresenter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            echo: false,
            failed: None,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn emit(&mut self, text: &str) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.failed = Some(e);
        }
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        self.finish()?;
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Surfaces the first write error since the last call.
    pub fn finish(&mut self) -> io::Result<()> {
        match self.failed.take() {
            Some(e) => Err(e),
            None => self.out.flush(),
        }
    }
}

impl Presenter for TerminalPresenter<'_> {
    fn write_line(&mut self, line: &OutputLine) {
        match line.kind {
            LineKind::Echo if !self.echo => {}
            LineKind::Error => self.emit(&format!("! {}", line.text)),
            LineKind::Help => self.emit(&format!("  {}", line.text)),
            LineKind::Narrative | LineKind::Echo => self.emit(&line.text),
        }
    }

    fn location_changed(&mut self, location: LocationId) {
        self.emit("");
        self.emit(&format!("[{}]", location.name()));
    }
}
