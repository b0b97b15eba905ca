// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Weave front end.
//!
//! These tests use `proptest` to verify invariants over generated inputs:
//!
//! 1. **Lexer never panics** — arbitrary string input always produces tokens
//! 2. **Token spans within input** — all spans satisfy `end <= input.len()`
//! 3. **Token spans strictly increasing** — spans are ordered and
//!    non-overlapping
//! 4. **Lexer is deterministic** — same input always produces same tokens
//! 5. **Valid fragments lex cleanly** — known-valid inputs produce no errors
//! 6. **Line/column mapping is monotone** — line never decreases over
//!    offsets, and the column resets to 1 at each line start
//! 7. **Unparse round-trips** — printing a parsed action and re-parsing it
//!    yields a structurally equal AST
//! 8. **Parser never panics** — any token stream the lexer produces can be
//!    parsed without panicking

use proptest::prelude::*;

use super::lexer::Lexer;
use super::locator::{LineCol, offset_to_line_col};
use super::parser::parse;

// ============================================================================
// Generators
// ============================================================================

/// Known-valid fragments that should lex without errors.
const VALID_FRAGMENTS: &[&str] = &[
    ">",
    "[",
    "]",
    ",",
    "+",
    ";",
    "foo",
    "a-b_0",
    "0start",
    "''",
    "'foo'",
    "`'don't'`",
    "'a$(b)c'",
    "``'x'``",
    "[foo, bar] > foobar [] > [];",
    "['cc' + ' -o app'] > build [] > [app];",
];

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_FRAGMENTS).prop_map(std::string::ToString::to_string)
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,6}"
}

/// Source text for one string literal: a backtick fence around a mix of
/// plain runs and `$(name)` interpolations. The plain runs avoid quote,
/// backtick, and dollar characters so the literal always lexes.
fn string_source() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        "[a-z ]{1,6}",
        ident().prop_map(|name| format!("$({name})")),
    ];
    (0usize..=2, prop::collection::vec(segment, 0..4)).prop_map(|(backticks, segments)| {
        let fence = "`".repeat(backticks);
        format!("{fence}'{}'{fence}", segments.concat())
    })
}

fn concat_source() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![ident(), string_source()], 1..4)
        .prop_map(|catees| catees.join(" + "))
}

fn list_source() -> impl Strategy<Value = String> {
    prop::collection::vec(concat_source(), 0..4).prop_map(|items| format!("[{}]", items.join(", ")))
}

/// Source text for one well-formed rule statement.
fn action_source() -> impl Strategy<Value = String> {
    (list_source(), ident(), list_source(), list_source())
        .prop_map(|(reqs, name, commands, updates)| format!("{reqs} > {name} {commands} > {updates};"))
}

/// Text mixing word runs with every newline flavour.
fn text_with_newlines() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z]{0,4}",
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("\r".to_string()),
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: Lexer never panics on arbitrary string input.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let _ = Lexer::new(&input).tokenize();
    }

    /// Property 2: All token spans are within input bounds and non-empty.
    #[test]
    fn token_spans_within_input(input in "\\PC{0,300}") {
        let (tokens, _) = Lexer::new(&input).tokenize();
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for token in &tokens {
            prop_assert!(
                token.span().end() <= input_len,
                "token {:?} span end {} exceeds input length {} for input {:?}",
                token.kind(),
                token.span().end(),
                input_len,
                input,
            );
            prop_assert!(
                token.span().start() < token.span().end(),
                "token {:?} has an empty span for input {:?}",
                token.kind(),
                input,
            );
        }
    }

    /// Property 3: Token spans are strictly increasing and non-overlapping.
    #[test]
    fn token_spans_strictly_increasing(input in "\\PC{0,300}") {
        let (tokens, _) = Lexer::new(&input).tokenize();
        for window in tokens.windows(2) {
            prop_assert!(
                window[1].span().start() >= window[0].span().end(),
                "overlapping spans: {:?} at {:?} and {:?} at {:?} for input {:?}",
                window[0].kind(),
                window[0].span(),
                window[1].kind(),
                window[1].span(),
                input,
            );
        }
    }

    /// Property 4: Lexer is deterministic — same input, same output.
    #[test]
    fn lexer_is_deterministic(input in "\\PC{0,200}") {
        let (tokens1, errors1) = Lexer::new(&input).tokenize();
        let (tokens2, errors2) = Lexer::new(&input).tokenize();
        prop_assert_eq!(tokens1, tokens2);
        prop_assert_eq!(errors1, errors2);
    }

    /// Property 5: Known-valid fragments produce no lexical errors.
    #[test]
    fn valid_fragments_lex_cleanly(input in valid_fragment()) {
        let (_, errors) = Lexer::new(&input).tokenize();
        prop_assert!(
            errors.is_empty(),
            "valid input {:?} produced lex errors {:?}",
            input,
            errors,
        );
    }

    /// Property 6: Line numbers never decrease over offsets, and the column
    /// resets to 1 whenever the line advances.
    #[test]
    fn line_col_is_monotone(text in text_with_newlines()) {
        let mut prev = offset_to_line_col(&text, 0).unwrap();
        prop_assert_eq!(prev, LineCol { line: 1, col: 1 });
        for offset in 1..=text.len() {
            let pos = offset_to_line_col(&text, offset).unwrap();
            prop_assert!(
                pos.line >= prev.line,
                "line decreased from {} to {} at offset {} in {:?}",
                prev.line,
                pos.line,
                offset,
                text,
            );
            if pos.line > prev.line {
                prop_assert_eq!(pos.col, 1);
            }
            prev = pos;
        }
        prop_assert!(offset_to_line_col(&text, text.len() + 1).is_err());
    }

    /// Property 7: Printing a parsed action and re-parsing it yields a
    /// structurally equal AST.
    #[test]
    fn unparse_round_trips(source in action_source()) {
        let (tokens, lex_errors) = Lexer::new(&source).tokenize();
        prop_assert!(lex_errors.is_empty(), "lex errors in {:?}: {:?}", source, lex_errors);
        let (actions, parse_errors) = parse(&tokens);
        prop_assert!(parse_errors.is_empty(), "parse errors in {:?}: {:?}", source, parse_errors);
        prop_assert_eq!(actions.len(), 1);

        let printed = actions[0].to_string();
        let (tokens2, lex_errors2) = Lexer::new(&printed).tokenize();
        prop_assert!(lex_errors2.is_empty(), "printed form {:?} has lex errors", printed);
        let (actions2, parse_errors2) = parse(&tokens2);
        prop_assert!(parse_errors2.is_empty(), "printed form {:?} has parse errors", printed);
        prop_assert_eq!(actions2, actions);
    }

    /// Property 8: Parser never panics on any lexable input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let (tokens, _) = Lexer::new(&input).tokenize();
        let _ = parse(&tokens);
    }
}
