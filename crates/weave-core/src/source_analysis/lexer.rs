// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Weave source code.
//!
//! This module converts source text into a sequence of [`Token`]s. The lexer
//! is hand-written for maximum control over backtracking and error recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: an unrecognized character is recorded as a
//!   [`LexError`] and skipped; lexing never stops early, so one pass
//!   collects every lexical error in the input
//! - **Fixed matcher order**: symbol, then string literal, then identifier.
//!   String-literal start and identifier start are mutually exclusive
//!   prefixes and symbol characters never collide with identifier
//!   characters, so the first matcher to succeed wins
//! - **Cheap backtracking**: the cursor is a plain byte offset; a failed
//!   string match restores it by copying the saved integer back
//!
//! # Example
//!
//! ```
//! use weave_core::Program;
//! use weave_core::source_analysis::lex;
//!
//! let program = Program::new("rules.weave", "[foo] > build [] > [];");
//! let (tokens, errors) = lex(&program);
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 11);
//! ```

use super::{InterpolPart, InterpolString, LexError, Span, Token, TokenKind};
use crate::Program;

/// A lexer that tokenizes Weave source code.
///
/// The lexer produces tokens with strictly increasing, non-overlapping
/// spans. Construct one with [`Lexer::new`] and drain it with
/// [`Lexer::tokenize`], or use the [`lex`] convenience function.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Current byte position in source.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Peeks at the character after the next one without consuming either.
    fn peek_second(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skips the whitespace run (space, tab, newline, carriage return)
    /// following a token.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    /// Consumes the longest (possibly empty) identifier run at the cursor.
    fn ident_run(&mut self) -> &'src str {
        let start = self.pos;
        while self.peek_char().is_some_and(is_ident_char) {
            self.advance();
        }
        &self.source[start..self.pos]
    }

    /// Matches a single-character punctuation token.
    fn lex_symbol(&mut self) -> Option<Token<'src>> {
        let kind = match self.peek_char()? {
            '>' => TokenKind::Arrow,
            '[' => TokenKind::BracketOpen,
            ']' => TokenKind::BracketClose,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Concat,
            ';' => TokenKind::Semicolon,
            _ => return None,
        };
        let start = self.pos;
        self.advance();
        Some(Token::new(kind, Span::from(start..self.pos)))
    }

    /// Matches an identifier: the longest run of `[0-9A-Za-z_-]`.
    ///
    /// There is no distinct rule for the first character, so identifiers may
    /// start with a digit.
    fn lex_ident(&mut self) -> Option<Token<'src>> {
        let start = self.pos;
        let text = self.ident_run();
        if text.is_empty() {
            return None;
        }
        Some(Token::new(
            TokenKind::Ident(text),
            Span::from(start..self.pos),
        ))
    }

    /// Consumes the close sequence `'` + `backticks` backticks, restoring
    /// the cursor if the full sequence is not present.
    fn try_close(&mut self, backticks: usize) -> bool {
        let save = self.pos;
        if !self.eat('\'') {
            return false;
        }
        for _ in 0..backticks {
            if !self.eat('`') {
                self.pos = save;
                return false;
            }
        }
        true
    }

    /// Matches a string literal: `N` backticks, `'`, content, `'`, `N`
    /// backticks, where `N` may be zero.
    ///
    /// Inside the content, the close sequence is attempted at every
    /// position, and `$(` opens an interpolation (an identifier run followed
    /// by `)`). Any failure (end of input before the close sequence, or a
    /// malformed interpolation) restores the cursor to the literal's first
    /// byte and fails the whole match, leaving the bytes to be reconsidered
    /// one at a time by the main loop.
    fn lex_string(&mut self) -> Option<Token<'src>> {
        let start = self.pos;

        let mut backticks = 0;
        while self.eat('`') {
            backticks += 1;
        }
        if !self.eat('\'') {
            self.pos = start;
            return None;
        }

        let mut parts = Vec::new();
        let mut literal_start = self.pos;
        loop {
            let close_start = self.pos;
            if self.try_close(backticks) {
                // literal runs are flushed only when non-empty
                if close_start > literal_start {
                    parts.push(InterpolPart::Literal(
                        &self.source[literal_start..close_start],
                    ));
                }
                return Some(Token::new(
                    TokenKind::String(InterpolString { backticks, parts }),
                    Span::from(start..self.pos),
                ));
            }

            match self.peek_char() {
                // unterminated
                None => {
                    self.pos = start;
                    return None;
                }
                Some('$') if self.peek_second() == Some('(') => {
                    let interp_start = self.pos;
                    self.advance(); // $
                    self.advance(); // (
                    let name = self.ident_run();
                    if name.is_empty() || !self.eat(')') {
                        self.pos = start;
                        return None;
                    }
                    if interp_start > literal_start {
                        parts.push(InterpolPart::Literal(
                            &self.source[literal_start..interp_start],
                        ));
                    }
                    parts.push(InterpolPart::Interpolation(name));
                    literal_start = self.pos;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Attempts the three matchers in fixed priority order.
    fn next_token(&mut self) -> Option<Token<'src>> {
        if let Some(token) = self.lex_symbol() {
            return Some(token);
        }
        if let Some(token) = self.lex_string() {
            return Some(token);
        }
        self.lex_ident()
    }

    /// Consumes the entire source, collecting tokens and lexical errors.
    ///
    /// Lexing never aborts: an unrecognized character is recorded and
    /// skipped, and scanning continues. A clean lex is one with an empty
    /// error list.
    #[must_use]
    pub fn tokenize(mut self) -> (Vec<Token<'src>>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(c) = self.peek_char() {
            if let Some(token) = self.next_token() {
                tokens.push(token);
                self.skip_whitespace();
            } else {
                let start = self.pos;
                self.advance();
                errors.push(LexError::unexpected_char(c, Span::from(start..self.pos)));
            }
        }

        (tokens, errors)
    }
}

/// Returns true for characters permitted in identifiers.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Tokenizes a program's source text.
///
/// Returns the token sequence and the lexical errors encountered. The token
/// sequence may be non-exhaustive when errors are present; callers that
/// need a clean token stream should check that the error list is empty.
#[must_use]
pub fn lex(program: &Program) -> (Vec<Token<'_>>, Vec<LexError>) {
    Lexer::new(program.text()).tokenize()
}
