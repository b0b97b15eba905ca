// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Weave source code.
//!
//! This module contains the lexer, the parser, and the diagnostic plumbing
//! shared between them.
//!
//! # Lexical Analysis
//!
//! [`lex`] converts a [`Program`](crate::Program)'s text into a sequence of
//! [`Token`]s. Each token carries its byte range via [`Span`]; identifier
//! and string payloads borrow from the program text.
//!
//! # Parsing
//!
//! [`parse`] converts tokens into [`Action`](crate::ast::Action)s by
//! recursive descent with one-token lookahead, recovering at statement
//! boundaries (`;`) after an error.
//!
//! # Error Handling
//!
//! Both passes collect their errors instead of stopping: [`lex`] returns
//! every [`LexError`] and [`parse`] every [`ParseError`] found in the
//! input. Rendering an error against its program (via
//! [`LexError::render`] / [`ParseError::render`]) produces a positioned
//! diagnostic string; [`offset_to_line_col`] does the underlying offset to
//! line/column mapping.

mod error;
mod lexer;
mod locator;
mod parser;
mod span;
mod token;

#[cfg(test)]
mod property_tests;

pub use error::{LexError, LexErrorKind, LocateError, ParseError, ParseErrorKind};
pub use lexer::{Lexer, lex};
pub use locator::{LineCol, format_error, offset_to_line_col};
pub use parser::parse;
pub use span::Span;
pub use token::{InterpolPart, InterpolString, Token, TokenKind};
