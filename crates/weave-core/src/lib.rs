// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Weave compiler core.
//!
//! This crate contains the front end of the Weave build-rule language:
//!
//! - Lexical analysis (tokenization, including string-interpolation lexing)
//! - Parsing (AST construction by recursive descent)
//! - Structured, resumable error reporting
//!
//! Both passes are pure in-memory transforms: they take a [`Program`] and
//! return their results together with every error found in the input,
//! rather than stopping at the first one or writing to a fixed stream.
//! Rule execution and command-line tooling live outside this crate.
//!
//! # Example
//!
//! ```
//! use weave_core::{Program, lex, parse};
//!
//! let program = Program::new("rules.weave", "[foo, bar] > build [] > [];");
//! let (tokens, lex_errors) = lex(&program);
//! let (actions, parse_errors) = parse(&tokens);
//!
//! assert!(lex_errors.is_empty() && parse_errors.is_empty());
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions[0].name, "build");
//! ```

pub mod ast;
pub mod program;
pub mod source_analysis;

pub use program::Program;
pub use source_analysis::{lex, parse};
