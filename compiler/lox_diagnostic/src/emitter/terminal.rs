//! Line-oriented terminal output.

use std::io::{self, Write};

use super::DiagnosticEmitter;
use crate::Diagnostic;

/// Writes one `[line N] Error: message` line per diagnostic.
///
/// Write failures are ignored: diagnostics go to a best-effort channel and
/// must never abort the run that produced them.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer, emitted: 0 }
    }

    /// Number of diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.emitted
    }

    /// Consume the emitter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr() -> Self {
        TerminalEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(self.writer, "{diagnostic}");
        self.emitted += 1;
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
