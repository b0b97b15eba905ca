// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Weave front end.
//!
//! Lexical and syntax errors are recoverable: both passes collect them and
//! keep going, so a single run reports every independent error in the input.
//! [`LocateError`] is different in kind: it signals API misuse (an offset
//! outside the source) and is returned as a hard `Result::Err`, never mixed
//! into the collected diagnostics.
//!
//! Errors carry source locations ([`Span`]) and integrate with [`miette`]
//! for rich reporting; [`LexError::render`] and [`ParseError::render`]
//! produce the classic `[<file> at <line>,<col>] <message>` form.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::Program;

use super::Span;
use super::locator;

/// A lexical error encountered during tokenization.
///
/// The lexer skips the offending character and continues, so any number of
/// these can be collected from one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), span)
    }

    /// Renders this error as a positioned diagnostic string.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] if the span does not lie within the program's
    /// text, a sign the error was rendered against the wrong program.
    pub fn render(&self, program: &Program) -> Result<String, LocateError> {
        locator::format_error(program, self.span, &self.to_string())
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that starts no symbol, string literal, or identifier.
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),
}

/// A syntax error encountered during parsing.
///
/// The parser recovers at the next `;`, so one of these is collected per
/// malformed rule statement.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of syntax error.
    #[source]
    pub kind: ParseErrorKind,
    /// The offending token's span, or the zero-width end-of-input span.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "expected X, got Y" error.
    #[must_use]
    pub fn expected_token(
        expected: impl Into<EcoString>,
        got: impl Into<EcoString>,
        span: Span,
    ) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken {
                expected: expected.into(),
                got: got.into(),
            },
            span,
        )
    }

    /// Renders this error as a positioned diagnostic string.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] if the span does not lie within the program's
    /// text, a sign the error was rendered against the wrong program.
    pub fn render(&self, program: &Program) -> Result<String, LocateError> {
        locator::format_error(program, self.span, &self.to_string())
    }
}

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The parser required one token type and found another.
    #[error("expected {expected}, got {got}")]
    ExpectedToken {
        /// Name of the required token type (or an alternation of names).
        expected: EcoString,
        /// Name of the token type actually found, or `end of input`.
        got: EcoString,
    },
}

/// An offset that cannot be located in the source.
///
/// Valid offsets run from `0` to the text length inclusive (the final
/// position names end-of-input). Receiving this error means the caller
/// passed an offset from some other buffer; it is not a property of the
/// source being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The offset lies past the end of the source text.
    #[error("offset {offset} is out of bounds (source is {len} bytes)")]
    OffsetOutOfBounds {
        /// The offset that was asked for.
        offset: usize,
        /// The length of the source text.
        len: usize,
    },
}
