//! The `$$` playground fence.
//!
//! A block whose delimiter is a run of exactly two `$` characters.
//! The interior is lifted out verbatim, dedented by the opening line's
//! indentation, escaped, and wrapped in the snippet widget placeholder
//! that the client-side enhancement script looks up by class name.

use crate::markup::{self, TrustedHtml};

use super::super::lines::LineTable;
use super::super::span::Span;
use super::super::tokens::{Token, TokenKind};
use super::super::ParseState;
use super::{BlockRule, RuleOutcome};

/// The `$$` block rule. Registered ahead of the generic fence rule so
/// marker runs of length two are claimed here first.
pub struct PlaygroundFence;

impl PlaygroundFence {
    /// Fence marker character.
    pub const MARKER: u8 = b'$';

    /// Opening run length. Exactly two: a single `$` is inline-math
    /// territory and three or more belong to longer generic fences.
    pub const OPEN_LEN: usize = 2;

    /// Class the enhancement script uses to locate snippet widgets.
    pub const SNIPPET_CLASS: &'static str = "go-playground-snippet";

    /// Cheap opener test used by the flow rule to know where to stop.
    #[must_use]
    pub fn opens(remainder: &str) -> bool {
        marker_run(remainder) == Self::OPEN_LEN
    }
}

/// Result of scanning for a playground fence at `start_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceScan {
    /// Interior line range, exclusive of both fence lines.
    pub content: Span,
    /// Line the cursor moves to after the block. Past the closer when
    /// one was found, otherwise exactly at the line that ended the scan.
    pub next_line: usize,
    /// Whether an explicit closing fence was found.
    pub had_closer: bool,
    /// Leading-whitespace width of the opening line, stripped uniformly
    /// from every interior line.
    pub dedent: usize,
}

/// Scans `[start_line, end_line)` for a playground block opening at
/// `start_line`.
///
/// Returns `None` when the line does not open one: no marker, or a run
/// of the wrong length. Text after the opening run is ignored.
///
/// The closer search accepts the first line whose marker run is at
/// least [`PlaygroundFence::OPEN_LEN`] long, is indented fewer than 4
/// columns past `blk_indent`, and carries nothing but whitespace after
/// the run. A non-blank line indented less than `blk_indent` closes the
/// block implicitly and is left unconsumed; so does running out of
/// lines. Unterminated blocks are not an error.
#[must_use]
pub fn scan(
    src: &str,
    lines: &LineTable,
    start_line: usize,
    end_line: usize,
    blk_indent: usize,
) -> Option<FenceScan> {
    let open = lines.line(start_line);
    if marker_run(open.remainder(src)) != PlaygroundFence::OPEN_LEN {
        return None;
    }

    let mut close_line = end_line;
    let mut had_closer = false;

    let mut next = start_line + 1;
    while next < end_line {
        let li = lines.line(next);

        if !li.is_blank() && li.indent < blk_indent {
            // Less-indented content ends the enclosing block, and this
            // block with it.
            close_line = next;
            break;
        }

        let rem = li.remainder(src);
        if rem.as_bytes().first() != Some(&PlaygroundFence::MARKER) {
            next += 1;
            continue;
        }
        if li.indent.saturating_sub(blk_indent) >= 4 {
            // Indented too far to count as a closer; ordinary content.
            next += 1;
            continue;
        }
        let run = marker_run(rem);
        if run < PlaygroundFence::OPEN_LEN {
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

    Some(FenceScan {
        content: Span {
            start: start_line + 1,
            end: close_line,
        },
        next_line: close_line + usize::from(had_closer),
        had_closer,
        dedent: open.indent,
    })
}

/// Builds the widget placeholder around already-extracted code.
///
/// Only the interpolated code goes through the encoder; the wrapper is
/// hand-authored markup.
#[must_use]
pub fn snippet_markup(code: &str) -> TrustedHtml {
    let mut out = String::with_capacity(code.len() + 96);
    out.push_str(r#"<textarea data-expanded="1" data-title="Toggle snippet" class=""#);
    out.push_str(PlaygroundFence::SNIPPET_CLASS);
    out.push_str("\">");
    out.push_str(&markup::encode_text(code));
    out.push_str("</textarea>");
    markup::trusted(out)
}

impl BlockRule for PlaygroundFence {
    fn name(&self) -> &'static str {
        "playground"
    }

    fn apply(&self, state: &ParseState<'_>) -> RuleOutcome {
        let Some(fs) = scan(state.src, state.lines, state.line, state.end_line, state.blk_indent)
        else {
            return RuleOutcome::NoMatch;
        };

        let code = state.lines.gather(state.src, fs.content, fs.dedent);
        let token = Token {
            kind: TokenKind::Playground {
                content: snippet_markup(code.trim()),
            },
            lines: Span {
                start: state.line,
                end: fs.next_line,
            },
            level: state.level,
        };

        RuleOutcome::Consumed {
            token,
            next_line: fs.next_line,
        }
    }
}

fn marker_run(remainder: &str) -> usize {
    remainder
        .bytes()
        .take_while(|&b| b == PlaygroundFence::MARKER)
        .count()
}
