// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source program representation.
//!
//! A [`Program`] pairs a filename with the source text it was loaded from.
//! It is the sole owner of the character data: every token and AST node
//! derived from it borrows slices of its text, so the `Program` must outlive
//! all of them. The borrow checker enforces this through the `'src` lifetime
//! on [`Token`](crate::source_analysis::Token) and the AST types.

use camino::{Utf8Path, Utf8PathBuf};

/// A named source program.
///
/// The text is a plain byte-length-delimited string; no sentinel terminator
/// is assumed. `Program` is immutable after construction.
///
/// # Examples
///
/// ```
/// use weave_core::Program;
///
/// let program = Program::new("rules.weave", "[] > noop [] > [];");
/// assert_eq!(program.filename(), "rules.weave");
/// assert_eq!(program.text().len(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    filename: Utf8PathBuf,
    text: String,
}

impl Program {
    /// Creates a program from a filename and its source text.
    #[must_use]
    pub fn new(filename: impl Into<Utf8PathBuf>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Returns the filename the source was loaded from.
    ///
    /// Used for rendering positioned diagnostics; the file itself is never
    /// touched by this crate.
    #[must_use]
    pub fn filename(&self) -> &Utf8Path {
        &self.filename
    }

    /// Returns the source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_accessors() {
        let program = Program::new("build/rules.weave", "[] > x [] > [];");
        assert_eq!(program.filename().file_name(), Some("rules.weave"));
        assert_eq!(program.text(), "[] > x [] > [];");
    }
}
