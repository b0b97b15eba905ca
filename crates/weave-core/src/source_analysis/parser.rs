// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Weave rule programs.
//!
//! The parser consumes the token sequence produced by the
//! [`lexer`](super::lexer) into a sequence of [`Action`]s with one-token
//! lookahead.
//!
//! # Grammar
//!
//! ```text
//! Program := Action*
//! Action  := List '>' Ident List '>' List ';'
//! List    := '[' ']' | '[' Concat (',' Concat)* ']'
//! Concat  := Operand ('+' Operand)*
//! Operand := Ident | String
//! ```
//!
//! # Error Recovery
//!
//! Every failure inside an action emits exactly one positioned
//! `expected ..., got ...` diagnostic and aborts that action. The parser
//! then synchronizes: it discards tokens until a `;` is consumed (or input
//! ends) and resumes with the next statement. One pass therefore reports
//! every malformed statement in the file, and well-formed statements parse
//! regardless of what precedes them.
//!
//! # Usage
//!
//! ```
//! use weave_core::Program;
//! use weave_core::source_analysis::{lex, parse};
//!
//! let program = Program::new("rules.weave", "[foo] > build [] > [out];");
//! let (tokens, _) = lex(&program);
//! let (actions, diagnostics) = parse(&tokens);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(actions[0].name, "build");
//! ```

use crate::ast::{Action, Catee, Concat, List};

use super::{ParseError, Span, Token, TokenKind};

/// Parses a token sequence into a sequence of actions.
///
/// Returns the well-formed actions and the syntax errors encountered, one
/// per malformed statement. A clean parse is one with an empty error list;
/// when errors are present the action sequence is still useful for
/// diagnostics and tooling, but it omits the malformed statements.
#[must_use]
pub fn parse<'src>(tokens: &[Token<'src>]) -> (Vec<Action<'src>>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let actions = parser.parse_program();
    (actions, parser.errors)
}

/// The parser state.
struct Parser<'t, 'src> {
    /// The tokens being parsed.
    tokens: &'t [Token<'src>],
    /// Current token index.
    current: usize,
    /// Accumulated syntax errors.
    errors: Vec<ParseError>,
}

impl<'t, 'src> Parser<'t, 'src> {
    /// Creates a new parser for the given tokens.
    fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.current)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.tokens.get(self.current);
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    /// Checks if the token stream is exhausted.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// The zero-width span one past the last token, where end-of-input
    /// diagnostics point.
    fn end_of_input_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => Span::new(token.span().end(), token.span().end()),
            None => Span::new(0, 0),
        }
    }

    // ========================================================================
    // Error Handling & Recovery
    // ========================================================================

    /// Records an `expected ..., got ...` error at the current token, or at
    /// end of input if the stream is exhausted.
    fn error_expected(&mut self, expected: &'static str) {
        let (got, span) = match self.peek() {
            Some(token) => (token.kind().type_name(), token.span()),
            None => ("end of input", self.end_of_input_span()),
        };
        self.errors.push(ParseError::expected_token(expected, got, span));
    }

    /// Consumes the current token if `want` accepts its kind; otherwise
    /// records an error and fails.
    fn expect(
        &mut self,
        expected: &'static str,
        want: impl Fn(&TokenKind<'src>) -> bool,
    ) -> Option<()> {
        match self.peek() {
            Some(token) if want(token.kind()) => {
                self.current += 1;
                Some(())
            }
            _ => {
                self.error_expected(expected);
                None
            }
        }
    }

    /// Synchronizes to the next statement boundary.
    ///
    /// Discards tokens until a `;` is consumed or input ends, bounding each
    /// diagnostic to (at most) one malformed statement.
    fn synchronize(&mut self) {
        while let Some(token) = self.advance() {
            if matches!(token.kind(), TokenKind::Semicolon) {
                return;
            }
        }
    }

    // ========================================================================
    // Grammar Productions
    // ========================================================================

    /// Parses the whole program, recovering after each malformed statement.
    fn parse_program(&mut self) -> Vec<Action<'src>> {
        let mut actions = Vec::new();
        while !self.is_at_end() {
            if let Some(action) = self.parse_action() {
                actions.push(action);
            } else {
                self.synchronize();
            }
        }
        actions
    }

    /// Parses one rule statement: `List '>' Ident List '>' List ';'`.
    fn parse_action(&mut self) -> Option<Action<'src>> {
        let reqs = self.parse_list()?;
        self.expect("arrow", |kind| matches!(kind, TokenKind::Arrow))?;
        let name = self.expect_ident()?;
        let commands = self.parse_list()?;
        self.expect("arrow", |kind| matches!(kind, TokenKind::Arrow))?;
        let updates = self.parse_list()?;
        self.expect("semicolon", |kind| matches!(kind, TokenKind::Semicolon))?;
        Some(Action {
            reqs,
            name,
            commands,
            updates,
        })
    }

    /// Parses a bracketed list: `'[' ']'` or `'[' Concat (',' Concat)* ']'`.
    fn parse_list(&mut self) -> Option<List<'src>> {
        self.expect("open bracket", |kind| {
            matches!(kind, TokenKind::BracketOpen)
        })?;

        if self
            .peek()
            .is_some_and(|t| matches!(t.kind(), TokenKind::BracketClose))
        {
            self.current += 1;
            return Some(List { items: Vec::new() });
        }

        let mut items = Vec::new();
        loop {
            items.push(self.parse_concat()?);
            match self.peek().map(Token::kind) {
                Some(TokenKind::Comma) => {
                    self.current += 1;
                }
                Some(TokenKind::BracketClose) => {
                    self.current += 1;
                    return Some(List { items });
                }
                _ => {
                    self.error_expected("comma or close bracket");
                    return None;
                }
            }
        }
    }

    /// Parses a `+`-joined operand sequence: `Operand ('+' Operand)*`.
    ///
    /// A missing operand after `+` is fatal to the whole action, not just
    /// the concatenation.
    fn parse_concat(&mut self) -> Option<Concat<'src>> {
        let mut catees = vec![self.parse_catee()?];
        while self
            .peek()
            .is_some_and(|t| matches!(t.kind(), TokenKind::Concat))
        {
            self.current += 1;
            catees.push(self.parse_catee()?);
        }
        Some(Concat { catees })
    }

    /// Parses a single operand: an identifier or a string literal.
    fn parse_catee(&mut self) -> Option<Catee<'src>> {
        match self.peek() {
            Some(token) => match token.kind() {
                TokenKind::Ident(name) => {
                    self.current += 1;
                    Some(Catee::Ident(*name))
                }
                TokenKind::String(string) => {
                    let string = string.clone();
                    self.current += 1;
                    Some(Catee::String(string))
                }
                _ => {
                    self.error_expected("string or identifier");
                    None
                }
            },
            None => {
                self.error_expected("string or identifier");
                None
            }
        }
    }

    /// Consumes an identifier token and returns its payload.
    fn expect_ident(&mut self) -> Option<&'src str> {
        match self.peek() {
            Some(token) => match token.kind() {
                TokenKind::Ident(name) => {
                    self.current += 1;
                    Some(*name)
                }
                _ => {
                    self.error_expected("identifier");
                    None
                }
            },
            None => {
                self.error_expected("identifier");
                None
            }
        }
    }
}
