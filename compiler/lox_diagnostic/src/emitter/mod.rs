//! Diagnostic Emitters
//!
//! Each emitter implements the [`DiagnosticEmitter`] trait. Only the plain
//! terminal format exists today; the trait keeps callers independent of it.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics, in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}
