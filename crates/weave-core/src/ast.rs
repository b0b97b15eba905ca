// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract syntax tree for Weave rule programs.
//!
//! A program is a sequence of [`Action`]s, one per rule statement:
//!
//! ```text
//! [main.c, util.c] > build [cc + ' -o app'] > [app];
//! ^^^^^^^^^^^^^^^^   ^^^^^ ^^^^^^^^^^^^^^^^   ^^^^^
//! reqs               name  commands            updates
//! ```
//!
//! AST nodes are created once by the parser and never mutated. Identifier
//! and string payloads borrow from the [`Program`](crate::Program) text that
//! was parsed, so the program must outlive the AST.
//!
//! Every node implements [`Display`](std::fmt::Display), rendering it back
//! to canonical source text; re-parsing that text yields a structurally
//! equal AST.

use std::fmt;

use crate::source_analysis::InterpolString;

/// One concatenation operand: an identifier or a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catee<'src> {
    /// A bare identifier.
    Ident(&'src str),
    /// A string literal, possibly containing interpolations.
    String(InterpolString<'src>),
}

/// A non-empty `+`-joined sequence of operands: `cc + ' -o ' + target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concat<'src> {
    /// The operands, in source order. Never empty.
    pub catees: Vec<Catee<'src>>,
}

/// A bracketed, comma-separated list of concatenations. May be empty: `[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'src> {
    /// The list elements, in source order.
    pub items: Vec<Concat<'src>>,
}

/// One full rule statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<'src> {
    /// What the rule requires before it can run.
    pub reqs: List<'src>,
    /// The rule's name.
    pub name: &'src str,
    /// The commands the rule runs.
    pub commands: List<'src>,
    /// What the rule produces.
    pub updates: List<'src>,
}

impl fmt::Display for Catee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::String(string) => write!(f, "{string}"),
        }
    }
}

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, catee) in self.catees.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{catee}")?;
        }
        Ok(())
    }
}

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} > {} {} > {};",
            self.reqs, self.name, self.commands, self.updates
        )
    }
}
