//! HTML rendering of the token stream.
//!
//! One dispatch arm per token kind. Playground tokens carry prebuilt
//! [`TrustedHtml`](crate::markup::TrustedHtml) and are emitted verbatim;
//! running them through the encoder again would double-escape.

use pulldown_cmark::{Options, Parser, html};

use crate::markup;
use crate::parsing::ParsedDoc;
use crate::parsing::tokens::{Token, TokenKind};

/// Renders a parsed document to an HTML fragment.
#[must_use]
pub fn render_html(doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for token in &doc.tokens {
        render_token(&mut out, token);
    }
    out
}

fn render_token(out: &mut String, token: &Token) {
    match &token.kind {
        TokenKind::Playground { content } => {
            out.push_str(content.as_str());
            out.push('\n');
        }
        TokenKind::CodeBlock { info, code } => {
            out.push_str("<pre><code");
            if let Some(lang) = info.split_whitespace().next() {
                out.push_str(" class=\"language-");
                out.push_str(&markup::encode_text(lang));
                out.push('"');
            }
            out.push('>');
            out.push_str(&markup::encode_text(code));
            out.push_str("</code></pre>\n");
        }
        TokenKind::Markdown { text } => {
            let parser = Parser::new_ext(text, Options::empty());
            html::push_html(out, parser);
        }
    }
}
