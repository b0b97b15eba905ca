// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Weave lexical analysis.
//!
//! This module defines the tokens produced by the lexer. Each token consists
//! of a [`TokenKind`] and a [`Span`] giving its exact byte range in the
//! source. Identifier and string payloads borrow from the owning
//! [`Program`](crate::Program) text rather than copying it, so tokens are
//! cheap to produce and clone.

use std::fmt;

use super::Span;

/// The kind of token, not including source location.
///
/// Punctuation kinds carry no payload; [`TokenKind::Ident`] carries the
/// identifier slice and [`TokenKind::String`] the decoded string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'src> {
    /// An identifier: `foo`, `a-b_0`. Digits may start an identifier.
    Ident(&'src str),

    /// A string literal with its interpolation structure: `` `'a $(b) c'` ``
    String(InterpolString<'src>),

    /// The list separator in a rule statement: `>`
    Arrow,

    /// List start: `[`
    BracketOpen,

    /// List end: `]`
    BracketClose,

    /// List element separator: `,`
    Comma,

    /// String/identifier concatenation: `+`
    Concat,

    /// Rule statement terminator: `;`
    Semicolon,
}

impl TokenKind<'_> {
    /// Returns the human-readable name of this token type, as used in
    /// `expected ..., got ...` diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::String(_) => "string",
            Self::Arrow => "arrow",
            Self::BracketOpen => "open bracket",
            Self::BracketClose => "close bracket",
            Self::Comma => "comma",
            Self::Concat => "concat",
            Self::Semicolon => "semicolon",
        }
    }
}

/// The decoded contents of a string literal.
///
/// A literal is fenced by `backticks` backtick characters around `'` quotes;
/// raising the fence count lets the content contain quote characters. The
/// content itself is an ordered sequence of [`InterpolPart`]s.
///
/// Invariants, maintained by the lexer:
///
/// - No `Literal` part is empty; empty runs are omitted, so adjacent
///   interpolations sit directly next to each other.
/// - An empty string literal (`''`) has zero parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolString<'src> {
    /// Number of backticks fencing the literal on each side.
    pub backticks: usize,
    /// The literal and interpolation runs, in source order.
    pub parts: Vec<InterpolPart<'src>>,
}

/// One run inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolPart<'src> {
    /// A run of literal text, borrowed from the source.
    Literal(&'src str),

    /// An `$(name)` interpolation; the payload is the identifier.
    Interpolation(&'src str),
}

impl fmt::Display for InterpolString<'_> {
    /// Renders the literal back to its source form, fences included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.backticks {
            write!(f, "`")?;
        }
        write!(f, "'")?;
        for part in &self.parts {
            match part {
                InterpolPart::Literal(text) => write!(f, "{text}")?,
                InterpolPart::Interpolation(name) => write!(f, "$({name})")?,
            }
        }
        write!(f, "'")?;
        for _ in 0..self.backticks {
            write!(f, "`")?;
        }
        Ok(())
    }
}

/// A token with its source location.
///
/// Tokens are created once by the lexer and never mutated. The lexer
/// guarantees that successive tokens have strictly increasing,
/// non-overlapping spans.
///
/// # Examples
///
/// ```
/// use weave_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Ident("foo"), Span::new(0, 3));
/// assert!(matches!(token.kind(), TokenKind::Ident("foo")));
/// assert_eq!(token.span().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind<'src>,
    span: Span,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind<'src>, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind<'src> {
        &self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(TokenKind::Ident("x").type_name(), "identifier");
        assert_eq!(TokenKind::Arrow.type_name(), "arrow");
        assert_eq!(TokenKind::BracketOpen.type_name(), "open bracket");
        assert_eq!(TokenKind::BracketClose.type_name(), "close bracket");
        assert_eq!(TokenKind::Comma.type_name(), "comma");
        assert_eq!(TokenKind::Concat.type_name(), "concat");
        assert_eq!(TokenKind::Semicolon.type_name(), "semicolon");
        let empty = InterpolString {
            backticks: 0,
            parts: Vec::new(),
        };
        assert_eq!(TokenKind::String(empty).type_name(), "string");
    }

    #[test]
    fn interpol_string_display() {
        let string = InterpolString {
            backticks: 2,
            parts: vec![
                InterpolPart::Literal("bar 'bar`'"),
                InterpolPart::Interpolation("bar"),
                InterpolPart::Literal(" bar"),
            ],
        };
        assert_eq!(string.to_string(), "``'bar 'bar`'$(bar) bar'``");
    }

    #[test]
    fn empty_interpol_string_display() {
        let string = InterpolString {
            backticks: 0,
            parts: Vec::new(),
        };
        assert_eq!(string.to_string(), "''");
    }

    #[test]
    fn token_accessors() {
        let token = Token::new(TokenKind::Semicolon, Span::new(4, 5));
        assert!(matches!(token.kind(), TokenKind::Semicolon));
        assert_eq!(token.span().start(), 4);
        assert_eq!(token.span().end(), 5);
    }
}
