use super::span::Span;

/// Local facts about a single source line, computed once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Byte offset of the line start.
    pub start: usize,
    /// Byte offset of the line end, excluding the terminator.
    pub end: usize,
    /// Number of leading whitespace characters (spaces and tabs).
    pub indent: usize,
}

impl LineInfo {
    /// Byte offset of the first non-whitespace character.
    ///
    /// Indentation is always ASCII, so this is `start + indent`.
    #[must_use]
    pub fn content_start(self) -> usize {
        self.start + self.indent
    }

    /// True if the line holds nothing but whitespace.
    #[must_use]
    pub fn is_blank(self) -> bool {
        self.content_start() >= self.end
    }

    /// The line text after its indentation.
    #[must_use]
    pub fn remainder(self, src: &str) -> &str {
        &src[self.content_start()..self.end]
    }
}

/// Per-line byte offsets and indentation for a document.
///
/// Built once before block parsing; every rule reads lines through it
/// rather than re-scanning the source.
#[derive(Debug, Clone)]
pub struct LineTable {
    lines: Vec<LineInfo>,
}

impl LineTable {
    /// Scans `src` into line descriptors.
    ///
    /// Line ends exclude `\n` and `\r\n` terminators. A trailing
    /// newline does not produce an empty final line.
    #[must_use]
    pub fn build(src: &str) -> Self {
        let bytes = src.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0usize;

        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                lines.push(line_info(bytes, start, i));
                start = i + 1;
            }
        }
        if start < bytes.len() {
            lines.push(line_info(bytes, start, bytes.len()));
        }

        Self { lines }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Descriptor for line `idx`. Panics if out of range.
    #[must_use]
    pub fn line(&self, idx: usize) -> LineInfo {
        self.lines[idx]
    }

    /// Joins the lines of `range`, stripping up to `dedent` leading
    /// whitespace characters from each line.
    ///
    /// Never cuts into non-whitespace: a line indented less than
    /// `dedent` only loses its own indentation. Every joined line ends
    /// with `\n`, including the last.
    #[must_use]
    pub fn gather(&self, src: &str, range: Span, dedent: usize) -> String {
        let mut out = String::new();
        for idx in range.start..range.end.min(self.lines.len()) {
            let li = self.lines[idx];
            let cut = li.indent.min(dedent);
            out.push_str(&src[li.start + cut..li.end]);
            out.push('\n');
        }
        out
    }
}

fn line_info(bytes: &[u8], start: usize, mut end: usize) -> LineInfo {
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    let mut indent = 0usize;
    while start + indent < end && matches!(bytes[start + indent], b' ' | b'\t') {
        indent += 1;
    }
    LineInfo { start, end, indent }
}
