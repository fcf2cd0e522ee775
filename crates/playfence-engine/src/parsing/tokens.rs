use serde::Serialize;

use crate::markup::TrustedHtml;

use super::span::Span;

/// What a block token holds. Tokens own their content; nothing points
/// back into the source after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TokenKind {
    /// Snippet widget placeholder with prebuilt, already-escaped markup.
    #[serde(rename = "playground-block")]
    Playground { content: TrustedHtml },
    /// Generic fenced code block with its info string.
    #[serde(rename = "code-block")]
    CodeBlock { info: String, code: String },
    /// A run of ordinary Markdown, rendered downstream as-is.
    #[serde(rename = "markdown")]
    Markdown { text: String },
}

/// One block-level token. Created once during the parse pass, immutable
/// afterwards, consumed exactly once at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub kind: TokenKind,
    /// Line range `[start, end)` this token consumed.
    pub lines: Span,
    /// Container nesting depth at emission time.
    pub level: usize,
}
