use std::fmt;

use crate::ErrorCode;

/// A single reported problem, located by line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// 1-based source line the problem was found on.
    pub line: u32,
    /// Main error message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic with an empty message on line 1.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            line: 1,
            message: String::new(),
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// `[line N] Error: message`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}
