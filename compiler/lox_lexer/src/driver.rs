//! The driver loop: run the pipeline until the cursor reaches EOF.

use crate::lex_error::LexError;
use crate::matchers::{ScanState, PIPELINE};

/// Scan the whole source held by `state`.
///
/// Every iteration consumes at least one byte: either a matcher succeeds or
/// the byte under the cursor is reported and skipped.
pub(crate) fn run(state: &mut ScanState<'_>) {
    while !state.cursor.is_eof() {
        if PIPELINE.iter().any(|matcher| matcher(state)) {
            continue;
        }
        let line = state.cursor.line();
        let byte = state.cursor.current();
        state.report(LexError::UnexpectedCharacter { line, byte });
        state.cursor.advance();
    }
}
