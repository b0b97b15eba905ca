// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Mapping byte offsets to line/column positions.
//!
//! Diagnostics are collected with byte [`Span`]s and only turned into
//! human-readable positions when rendered. [`offset_to_line_col`] does the
//! mapping and [`format_error`] produces the positioned diagnostic string
//! `[<file> at <line>,<col>] <message>`.
//!
//! Lines and columns are both 1-based. Columns count bytes within the line;
//! `\n`, `\r`, and `\r\n` each end a line, with `\r\n` consumed as a single
//! transition.

use crate::Program;

use super::Span;
use super::error::LocateError;

/// A 1-based line/column position in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column within the line, starting at 1.
    pub col: usize,
}

/// Maps a byte offset to its line/column position.
///
/// Offsets from `0` to `text.len()` inclusive are valid; the final offset
/// names the position one past the last byte, which is where end-of-input
/// diagnostics point.
///
/// # Errors
///
/// Returns [`LocateError::OffsetOutOfBounds`] for offsets past the end of
/// input. Callers should treat that as a programmer error (an offset from
/// some other buffer), not a recoverable runtime condition.
///
/// # Examples
///
/// ```
/// use weave_core::source_analysis::offset_to_line_col;
///
/// let pos = offset_to_line_col("ab\ncd", 3).unwrap();
/// assert_eq!((pos.line, pos.col), (2, 1));
/// ```
pub fn offset_to_line_col(text: &str, offset: usize) -> Result<LineCol, LocateError> {
    if offset > text.len() {
        return Err(LocateError::OffsetOutOfBounds {
            offset,
            len: text.len(),
        });
    }

    let bytes = text.as_bytes();
    let mut line = 1;
    let mut col = 1;
    let mut i = 0;
    while i < offset {
        match bytes[i] {
            b'\n' => {
                line += 1;
                col = 1;
                i += 1;
            }
            b'\r' => {
                line += 1;
                col = 1;
                i += 1;
                // \r\n counts as one newline
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {
                col += 1;
                i += 1;
            }
        }
    }
    Ok(LineCol { line, col })
}

/// Formats a positioned diagnostic for the given program and span.
///
/// Spans of length 0 or 1 render as `[<file> at <line>,<col>] <message>`;
/// longer spans as `[<file> at <line>,<col> to <line>,<col>] <message>`,
/// where the second position locates the span's final byte.
///
/// # Errors
///
/// Returns [`LocateError`] if either end of the span cannot be located in
/// the program's text.
pub fn format_error(
    program: &Program,
    span: Span,
    message: &str,
) -> Result<String, LocateError> {
    let text = program.text();
    let start = offset_to_line_col(text, span.start() as usize)?;
    if span.len() <= 1 {
        Ok(format!(
            "[{} at {},{}] {message}",
            program.filename(),
            start.line,
            start.col
        ))
    } else {
        let end = offset_to_line_col(text, span.end() as usize - 1)?;
        Ok(format!(
            "[{} at {},{} to {},{}] {message}",
            program.filename(),
            start.line,
            start.col,
            end.line,
            end.col
        ))
    }
}
