//! Fallback rule for ordinary Markdown.
//!
//! Block and inline grammar beyond the fence rules is delegated
//! wholesale to the downstream Markdown renderer, so this rule only
//! needs to find where the next fence begins. Interior blank lines stay
//! inside the segment; splitting on them would tear apart loose lists.

use super::super::ParseState;
use super::super::lines::LineInfo;
use super::super::span::Span;
use super::super::tokens::{Token, TokenKind};
use super::{BlockRule, FencedCode, PlaygroundFence, RuleOutcome};

/// Claims any non-blank line the fence rules declined, and everything
/// after it up to the next fence opener.
pub struct MarkdownFlow;

impl BlockRule for MarkdownFlow {
    fn name(&self) -> &'static str {
        "flow"
    }

    fn apply(&self, state: &ParseState<'_>) -> RuleOutcome {
        let mut stop = state.line + 1;
        while stop < state.end_line {
            let li = state.lines.line(stop);
            if !li.is_blank() && opens_fence(state, li) {
                break;
            }
            stop += 1;
        }

        // Trailing blank separators belong to no token.
        while stop > state.line + 1 && state.lines.line(stop - 1).is_blank() {
            stop -= 1;
        }

        let lines = Span {
            start: state.line,
            end: stop,
        };
        let text = state.lines.gather(state.src, lines, 0);

        RuleOutcome::Consumed {
            token: Token {
                kind: TokenKind::Markdown { text },
                lines,
                level: state.level,
            },
            next_line: stop,
        }
    }
}

fn opens_fence(state: &ParseState<'_>, li: LineInfo) -> bool {
    let rem = li.remainder(state.src);
    PlaygroundFence::opens(rem) || FencedCode::opens(li, rem, state.blk_indent)
}
