use playfence_engine::{TokenKind, parse_document, render_html};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn only_playground_content(src: &str) -> String {
    let doc = parse_document(src);
    let snippets: Vec<&str> = doc
        .tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Playground { content } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(snippets.len(), 1, "expected one snippet in {src:?}");
    snippets[0].to_string()
}

fn snippet_interior(markup: &str) -> String {
    let open_end = markup.find('>').unwrap() + 1;
    let close = markup.rfind("</textarea>").unwrap();
    markup[open_end..close].to_string()
}

#[rstest]
#[case("$$\npackage main\n$$\n", "package main")]
#[case("  $$\n  code.Line()\n  $$\n", "code.Line()")]
#[case("$$\nx := 1", "x := 1")]
#[case("$$\n\n  indented()\n\n$$\n", "indented()")]
fn snippet_content_is_dedented_and_trimmed(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(snippet_interior(&only_playground_content(src)), expected);
}

#[test]
fn reserved_characters_are_encoded() {
    let markup = only_playground_content("$$\nif a < b && b > c {}\n$$\n");
    assert_eq!(
        snippet_interior(&markup),
        "if a &lt; b &amp;&amp; b &gt; c {}"
    );
}

#[test]
fn unterminated_block_spans_to_document_end() {
    let doc = parse_document("$$\nx := 1");
    assert_eq!(doc.tokens.len(), 1);
    assert_eq!(doc.tokens[0].lines.start, 0);
    assert_eq!(doc.tokens[0].lines.end, 2);
}

#[test]
fn one_and_three_marker_lines_never_open() {
    for src in ["$\ncode\n$\n", "$$$\ncode\n$$$\n"] {
        let doc = parse_document(src);
        assert!(
            doc.tokens
                .iter()
                .all(|t| !matches!(t.kind, TokenKind::Playground { .. })),
            "unexpected snippet for {src:?}"
        );
    }
}

#[test]
fn dollar_fence_inside_code_fence_is_not_claimed() {
    let src = "```\n$$\nnot a widget\n$$\n```\n";
    let doc = parse_document(src);
    assert_eq!(doc.tokens.len(), 1);
    assert!(matches!(doc.tokens[0].kind, TokenKind::CodeBlock { .. }));
    assert!(!render_html(&doc).contains("go-playground-snippet"));
}

#[test]
fn code_fence_inside_dollar_fence_is_snippet_content() {
    let src = "$$\n```go\nfmt.Println(1)\n```\n$$\n";
    let markup = only_playground_content(src);
    assert_eq!(
        snippet_interior(&markup),
        "```go\nfmt.Println(1)\n```"
    );
}

#[test]
fn docs_page_renders_in_document_order() {
    let src = "\
# Getting started

Open a database:

$$
sess, err := db.Open(settings)
$$

Check `err` before use.
";
    let doc = parse_document(src);
    let kinds: Vec<&str> = doc
        .tokens
        .iter()
        .map(|t| match &t.kind {
            TokenKind::Markdown { .. } => "markdown",
            TokenKind::Playground { .. } => "playground",
            TokenKind::CodeBlock { .. } => "code",
        })
        .collect();
    assert_eq!(kinds, vec!["markdown", "playground", "markdown"]);

    let html = render_html(&doc);
    assert_eq!(
        html,
        "<h1>Getting started</h1>\n<p>Open a database:</p>\n\
         <textarea data-expanded=\"1\" data-title=\"Toggle snippet\" \
         class=\"go-playground-snippet\">sess, err := db.Open(settings)</textarea>\n\
         <p>Check <code>err</code> before use.</p>\n"
    );
}

#[test]
fn two_snippets_make_two_tokens() {
    let src = "$$\none()\n$$\n\n$$\ntwo()\n$$\n";
    let doc = parse_document(src);
    let snippets = doc
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Playground { .. }))
        .count();
    assert_eq!(snippets, 2);
}

#[test]
fn empty_interior_yields_empty_snippet() {
    let markup = only_playground_content("$$\n$$\n");
    assert_eq!(snippet_interior(&markup), "");
}
