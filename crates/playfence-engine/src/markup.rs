//! Escaping and the trusted-markup boundary.
//!
//! Widget templates are assembled at parse time from hand-authored
//! markup plus escaped interpolations. [`TrustedHtml`] marks the result
//! as ready to emit: the renderer passes it through verbatim, and
//! nothing outside this crate can construct one, so every interpolation
//! point is forced through [`encode_text`] exactly once.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Markup that is safe to emit without further escaping.
///
/// Construction is crate-private. The escape transform is not
/// idempotent, so holders must never run a `TrustedHtml` value through
/// [`encode_text`] again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wraps already-safe markup. Callers own the proof of safety: every
/// interpolated fragment must have gone through [`encode_text`].
pub(crate) fn trusted(markup: String) -> TrustedHtml {
    TrustedHtml(markup)
}

/// Escapes the five markup-reserved characters: `&`, `<`, `>`, `"`, `'`.
///
/// Total over arbitrary input; everything else, control characters
/// included, passes through unchanged.
#[must_use]
pub fn encode_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_reserved_characters() {
        assert_eq!(encode_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(encode_text(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(encode_text("it's"), "it&#x27;s");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(encode_text("func main() {}"), "func main() {}");
    }

    #[test]
    fn control_characters_pass_through() {
        assert_eq!(encode_text("a\tb\x00c\n"), "a\tb\x00c\n");
    }

    #[test]
    fn round_trips_through_entity_decoding() {
        let original = "if a < b && b > c { fmt.Println(\"ok\", 'x') }";
        let encoded = encode_text(original);
        assert_eq!(html_escape::decode_html_entities(&encoded), original);
    }

    #[test]
    fn encoding_twice_is_observably_different() {
        let once = encode_text("&").into_owned();
        let twice = encode_text(&once).into_owned();
        assert_eq!(once, "&amp;");
        assert_eq!(twice, "&amp;amp;");
    }
}
