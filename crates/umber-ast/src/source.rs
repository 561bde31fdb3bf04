//! Source text handling.

/// A (path, content) pair supplying byte offsets for diagnostics.
///
/// Construction strips a UTF-8 BOM and normalizes `\r\n`, `\r`, and `\f`
/// line endings to `\n`, so spans are byte-exact offsets into the
/// normalized content. Immutable for the lifetime of a compile.
#[derive(Debug, Clone)]
pub struct Source {
    /// Path the content was loaded from, used verbatim in diagnostics.
    pub path: String,
    content: String,
}

impl Source {
    /// Create a source, normalizing line endings and skipping a BOM.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: normalize(content.into()),
        }
    }

    /// The normalized content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Convert a byte offset into a 1-based (line, column) pair.
    ///
    /// The column is the 1-based byte offset within the line. This rescans
    /// the source, which is acceptable because it only runs on failure.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let mut line = 1;
        let mut line_start = 0;
        for (i, b) in self.content.bytes().enumerate() {
            if i >= offset {
                break;
            }
            if b == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        (line, offset - line_start + 1)
    }

    /// The full text of the line containing `offset`, without its newline.
    pub fn line_at(&self, offset: usize) -> &str {
        let offset = offset.min(self.content.len());
        let start = self.content[..offset]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.content[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.content.len());
        &self.content[start..end]
    }
}

fn normalize(content: String) -> String {
    let content = match content.strip_prefix('\u{feff}') {
        Some(rest) => rest,
        None => content.as_str(),
    };

    if !content.contains(['\r', '\u{c}']) {
        return content.to_owned();
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{c}' => out.push('\n'),
            _ => out.push(ch),
        }
    }
    out
}
