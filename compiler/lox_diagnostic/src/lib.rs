//! Diagnostic reporting for the Lox tokenizer.
//!
//! A [`Diagnostic`] is a plain value: error code, line and message. Emitters
//! decide how it is rendered; the [`TerminalEmitter`] writes the
//! line-oriented format consumed by existing tooling:
//!
//! ```text
//! [line 3] Error: Unexpected character: @
//! ```
//!
//! There is no warning severity: every diagnostic fails the run.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use emitter::{DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
