//! Generic fenced code blocks (``` or ~~~).
//!
//! Runs after the playground rule, so `$` runs never arrive here, and
//! everything between a fence pair is sealed off from the other rules.

use super::super::ParseState;
use super::super::lines::LineInfo;
use super::super::span::Span;
use super::super::tokens::{Token, TokenKind};
use super::{BlockRule, RuleOutcome};

/// Which marker a fence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(Self::Backticks),
            b'~' => Some(Self::Tildes),
            _ => None,
        }
    }

    fn marker(self) -> u8 {
        match self {
            Self::Backticks => b'`',
            Self::Tildes => b'~',
        }
    }
}

/// The generic fenced-code rule.
pub struct FencedCode;

impl FencedCode {
    /// Minimum opening run length.
    pub const MIN_OPEN_LEN: usize = 3;

    /// Cheap opener test used by the flow rule to know where to stop.
    #[must_use]
    pub fn opens(li: LineInfo, remainder: &str, blk_indent: usize) -> bool {
        li.indent.saturating_sub(blk_indent) < 4 && open_fence(remainder).is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenFence {
    kind: FenceKind,
    run: usize,
}

fn open_fence(remainder: &str) -> Option<OpenFence> {
    let kind = FenceKind::from_byte(*remainder.as_bytes().first()?)?;
    let run = marker_run(remainder, kind.marker());
    if run < FencedCode::MIN_OPEN_LEN {
        return None;
    }
    // An info string with a backtick would be ambiguous with an inline
    // code span, so backtick fences reject it.
    if kind == FenceKind::Backticks && remainder[run..].contains('`') {
        return None;
    }
    Some(OpenFence { kind, run })
}

fn marker_run(remainder: &str, marker: u8) -> usize {
    remainder.bytes().take_while(|&b| b == marker).count()
}

impl BlockRule for FencedCode {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn apply(&self, state: &ParseState<'_>) -> RuleOutcome {
        let open_line = state.lines.line(state.line);
        if open_line.indent.saturating_sub(state.blk_indent) >= 4 {
            return RuleOutcome::NoMatch;
        }
        let rem = open_line.remainder(state.src);
        let Some(open) = open_fence(rem) else {
            return RuleOutcome::NoMatch;
        };
        let info = rem[open.run..].trim().to_string();

        let mut close_line = state.end_line;
        let mut had_closer = false;

        let mut next = state.line + 1;
        while next < state.end_line {
            let li = state.lines.line(next);

            if !li.is_blank() && li.indent < state.blk_indent {
                close_line = next;
                break;
            }

            let rem = li.remainder(state.src);
            if rem.as_bytes().first() != Some(&open.kind.marker()) {
                next += 1;
                continue;
            }
            if li.indent.saturating_sub(state.blk_indent) >= 4 {
                next += 1;
                continue;
            }
            let run = marker_run(rem, open.kind.marker());
            if run < open.run {
                next += 1;
                continue;
            }
            if !rem[run..].bytes().all(|b| matches!(b, b' ' | b'\t')) {
                next += 1;
                continue;
            }

            close_line = next;
            had_closer = true;
            break;
        }

        let next_line = close_line + usize::from(had_closer);
        let code = state.lines.gather(
            state.src,
            Span {
                start: state.line + 1,
                end: close_line,
            },
            open_line.indent,
        );

        RuleOutcome::Consumed {
            token: Token {
                kind: TokenKind::CodeBlock { info, code },
                lines: Span {
                    start: state.line,
                    end: next_line,
                },
                level: state.level,
            },
            next_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::parse_document;
    use super::*;

    fn single_code_block(src: &str) -> (String, String) {
        let doc = parse_document(src);
        assert_eq!(doc.tokens.len(), 1, "tokens: {:?}", doc.tokens);
        match &doc.tokens[0].kind {
            TokenKind::CodeBlock { info, code } => (info.clone(), code.clone()),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn backtick_fence_with_info() {
        let (info, code) = single_code_block("```go\nfunc main() {}\n```\n");
        assert_eq!(info, "go");
        assert_eq!(code, "func main() {}\n");
    }

    #[test]
    fn tilde_fence() {
        let (info, code) = single_code_block("~~~\ntext\n~~~\n");
        assert_eq!(info, "");
        assert_eq!(code, "text\n");
    }

    #[test]
    fn backtick_info_may_not_contain_backticks() {
        let doc = parse_document("``` a`b\ntext\n```\n");
        assert!(matches!(doc.tokens[0].kind, TokenKind::Markdown { .. }));
    }

    #[test]
    fn tilde_info_may_contain_backticks() {
        let (info, _) = single_code_block("~~~ a`b\ntext\n~~~\n");
        assert_eq!(info, "a`b");
    }

    #[test]
    fn closer_must_be_at_least_as_long() {
        let (_, code) = single_code_block("````\n```\n````\n");
        assert_eq!(code, "```\n");
    }

    #[test]
    fn mismatched_marker_does_not_close() {
        let (_, code) = single_code_block("```\n~~~\n```\n");
        assert_eq!(code, "~~~\n");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let (_, code) = single_code_block("```\nlast\n");
        assert_eq!(code, "last\n");
    }

    #[test]
    fn content_is_dedented_by_opening_indent() {
        let (_, code) = single_code_block("  ```\n  a\n    b\n  ```\n");
        assert_eq!(code, "a\n  b\n");
    }

    #[test]
    fn dollar_lines_inside_fence_stay_code() {
        let (_, code) = single_code_block("```\n$$\nnot a widget\n$$\n```\n");
        assert_eq!(code, "$$\nnot a widget\n$$\n");
    }

    #[test]
    fn two_markers_are_not_a_fence() {
        let doc = parse_document("``\ntext\n``\n");
        assert!(matches!(doc.tokens[0].kind, TokenKind::Markdown { .. }));
    }
}
