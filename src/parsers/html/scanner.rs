//! 基于标记的标签扫描器
//!
//! 该扫描器不构建 DOM，而是按标签起始符（`<link`、`<script`、`<img`）切分文本，
//! 在每个片段中查找定义性标记与目标属性。缺少标记、属性或结束符的片段会被跳过，
//! 原文保持不变。

use tracing::trace;

/// Quote characters accepted around attribute values
const QUOTES: &[char] = &['"', '\''];

/// Families of tags the packer knows how to inline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// `<link rel="stylesheet" href="...">`
    Stylesheet,
    /// `<script src="..."></script>`
    Script,
    /// `<link rel="shortcut icon" href="...">`
    Icon,
    /// `<img src="...">`
    Image,
}

impl TagKind {
    /// Token that opens an occurrence
    pub fn opening_token(self) -> &'static str {
        match self {
            TagKind::Stylesheet | TagKind::Icon => "<link",
            TagKind::Script => "<script",
            TagKind::Image => "<img",
        }
    }

    /// Literal text that closes an occurrence
    pub fn terminator(self) -> &'static str {
        match self {
            TagKind::Script => "></script>",
            _ => ">",
        }
    }

    /// Text that must appear inside the tag for it to count as a match
    pub fn marker(self) -> &'static str {
        match self {
            TagKind::Stylesheet => "stylesheet",
            TagKind::Icon => "shortcut icon",
            TagKind::Script | TagKind::Image => "src=",
        }
    }

    /// Attribute holding the reference
    pub fn attribute(self) -> &'static str {
        match self {
            TagKind::Stylesheet | TagKind::Icon => "href=",
            TagKind::Script | TagKind::Image => "src=",
        }
    }
}

/// A matched tag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Full tag text, from the opening token through the terminator
    pub tag: &'a str,
    /// Attribute value with its quotes removed
    pub value: &'a str,
}

/// Lazily yields the occurrences of one tag family within a document
pub struct TagScanner<'a> {
    source: &'a str,
    kind: TagKind,
    cursor: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(source: &'a str, kind: TagKind) -> Self {
        Self {
            source,
            kind,
            cursor: 0,
        }
    }

    fn match_chunk(&self, start: usize, chunk: &'a str) -> Option<TagOccurrence<'a>> {
        let opening = self.kind.opening_token();
        let terminator = self.kind.terminator();

        let span_len = chunk.find(terminator)?;
        let span = &chunk[..span_len];

        if !span.contains(self.kind.marker()) {
            return None;
        }

        let value = first_quoted_value(span, self.kind.attribute())?;
        let tag_len = opening.len() + span_len + terminator.len();
        let source = self.source;

        Some(TagOccurrence {
            tag: &source[start..start + tag_len],
            value,
        })
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = TagOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let opening = self.kind.opening_token();

        while self.cursor < source.len() {
            let start = self.cursor + source[self.cursor..].find(opening)?;
            let body_start = start + opening.len();
            let body_end = source[body_start..]
                .find(opening)
                .map_or(source.len(), |i| body_start + i);

            self.cursor = body_end;

            match self.match_chunk(start, &source[body_start..body_end]) {
                Some(occurrence) => return Some(occurrence),
                None => trace!(kind = ?self.kind, offset = start, "skipping unmatched tag"),
            }
        }

        None
    }
}

/// Shorthand for `TagScanner::new`
pub fn scan(source: &str, kind: TagKind) -> TagScanner<'_> {
    TagScanner::new(source, kind)
}

/// Takes the first quoted value after `attribute`.
///
/// Either quote character may open or close the value. Returns `None` when the
/// attribute is missing or no complete pair of quotes follows it.
pub fn first_quoted_value<'a>(text: &'a str, attribute: &str) -> Option<&'a str> {
    let rest = &text[text.find(attribute)? + attribute.len()..];
    let open = rest.find(QUOTES)?;
    let value = &rest[open + 1..];
    let close = value.find(QUOTES)?;

    Some(&value[..close])
}
