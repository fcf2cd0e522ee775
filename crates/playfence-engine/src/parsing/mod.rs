//! # Block Parsing
//!
//! Single-pass, line-oriented block tokenization.
//!
//! ## Phases
//!
//! 1. **Line table** (`lines`): byte offsets and indentation for every
//!    line, computed once up front
//! 2. **Rule chain** (`rules`): at each candidate line the ordered
//!    block rules are tried until one consumes lines and emits a token
//!
//! ## Modules
//!
//! - **`lines`**: `LineTable` / `LineInfo` per-line facts
//! - **`span`**: half-open line ranges
//! - **`tokens`**: the immutable token stream
//! - **`rules`**: `BlockRule` trait and the shipped rule chain
//!
//! ## Key Invariants
//!
//! - Rules never mutate shared state: they read a [`ParseState`] and
//!   return an outcome; only the driver appends tokens and moves the
//!   cursor
//! - Fenced zones are raw: lines consumed by a fence rule are never
//!   offered to any other rule
//! - Parsing is total; a line nobody claims is impossible because the
//!   flow rule accepts any non-blank line

pub mod lines;
pub mod rules;
pub mod span;
pub mod tokens;

use lines::LineTable;
use rules::{RuleOutcome, rule_chain};
use tokens::Token;

/// Read-only parse context handed to block rules.
///
/// `line` is the candidate line the rule is being tried at. The driver
/// is the exclusive mutator of the cursor and the token stream; rules
/// communicate through [`RuleOutcome`] alone.
#[derive(Debug, Clone, Copy)]
pub struct ParseState<'s> {
    /// Full document source.
    pub src: &'s str,
    /// Precomputed per-line facts for `src`.
    pub lines: &'s LineTable,
    /// Current candidate line.
    pub line: usize,
    /// Exclusive end of the scannable range.
    pub end_line: usize,
    /// Indentation baseline of the enclosing container.
    pub blk_indent: usize,
    /// Container nesting depth at the candidate line.
    pub level: usize,
}

/// The result of one parse pass.
#[derive(Debug)]
pub struct ParsedDoc {
    pub tokens: Vec<Token>,
}

/// Tokenizes a document in a single pass over its lines.
///
/// Blank lines between blocks are skipped; everything else is consumed
/// by the first rule in the chain that claims it.
#[must_use]
pub fn parse_document(src: &str) -> ParsedDoc {
    let lines = LineTable::build(src);
    let chain = rule_chain();
    let mut tokens: Vec<Token> = Vec::new();
    let mut cursor = 0usize;
    let end_line = lines.len();

    while cursor < end_line {
        if lines.line(cursor).is_blank() {
            cursor += 1;
            continue;
        }

        let state = ParseState {
            src,
            lines: &lines,
            line: cursor,
            end_line,
            blk_indent: 0,
            level: 0,
        };

        let mut advanced = false;
        for rule in &chain {
            if let RuleOutcome::Consumed { token, next_line } = rule.apply(&state) {
                debug_assert!(next_line > cursor, "rule {} made no progress", rule.name());
                tokens.push(token);
                cursor = next_line;
                advanced = true;
                break;
            }
        }

        // The flow rule accepts any non-blank line, so this only
        // guards against a future rule chain with no fallback.
        if !advanced {
            cursor += 1;
        }
    }

    ParsedDoc { tokens }
}

#[cfg(test)]
mod driver_tests {
    use super::tokens::TokenKind;
    use super::*;

    #[test]
    fn blank_document_yields_no_tokens() {
        assert!(parse_document("").tokens.is_empty());
        assert!(parse_document("\n\n   \n").tokens.is_empty());
    }

    #[test]
    fn token_line_spans_cover_consumed_lines() {
        let doc = parse_document("one\n\n$$\ncode\n$$\n\ntwo\n");
        let spans: Vec<_> = doc.tokens.iter().map(|t| (t.lines.start, t.lines.end)).collect();
        assert_eq!(spans, vec![(0, 1), (2, 5), (6, 7)]);
    }

    #[test]
    fn rules_are_tried_in_registration_order() {
        // `$$` must be claimed by the playground rule even though the
        // flow rule would also accept the line.
        let doc = parse_document("$$\nx\n$$\n");
        assert_eq!(doc.tokens.len(), 1);
        assert!(matches!(doc.tokens[0].kind, TokenKind::Playground { .. }));
    }
}
