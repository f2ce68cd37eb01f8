//! Folder-name parsing for the bracket tagging convention.
//!
//! Comic folders carry their metadata in the name itself. Free text is the
//! title; bracketed segments are tags, classified by the bracket kind:
//!
//! ```text
//! Series Name [Writer] (Genre One) (Genre Two) 【Extra】
//! └─ title ─┘ └square┘ └─ round ─┘ └─ round ─┘ └ cjk ┘
//! ```
//!
//! ## Scanning rules
//!
//! A single left-to-right pass with one accumulator and one "open bracket"
//! marker. Outside a bracket, an opening character flushes the accumulator
//! into the title. Inside a bracket only the matching closing character is
//! special; everything else, including other opening characters, is plain
//! text. Brackets therefore do not nest:
//!
//! - `"A [x (y) z]"` → title `["A"]`, square `["x (y) z"]`
//! - `"A (x] y)"` → title `["A"]`, round `["x] y"]`
//!
//! ## Unterminated brackets
//!
//! Content after an opening bracket that is never closed is dropped. It is
//! not appended to the title and not recorded as a tag:
//!
//! - `"Title [Unclosed"` → title `["Title"]`, square `[]`

/// The three delimiter pairs recognised in folder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `(...)`
    Round,
    /// `[...]`
    Square,
    /// `【...】`
    Cjk,
}

impl BracketKind {
    /// Bracket kind opened by `c`, if any.
    pub fn opened_by(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '【' => Some(Self::Cjk),
            _ => None,
        }
    }

    /// Character that closes this bracket kind.
    pub fn closing(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Cjk => '】',
        }
    }
}

/// Segments of a folder name, each list in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    /// Unbracketed text runs, trimmed.
    pub title: Vec<String>,
    /// Contents of `(...)` segments.
    pub round_bracket: Vec<String>,
    /// Contents of `[...]` segments.
    pub square_bracket: Vec<String>,
    /// Contents of `【...】` segments.
    pub cjk_bracket: Vec<String>,
}

impl ParsedName {
    fn segments_mut(&mut self, kind: BracketKind) -> &mut Vec<String> {
        match kind {
            BracketKind::Round => &mut self.round_bracket,
            BracketKind::Square => &mut self.square_bracket,
            BracketKind::Cjk => &mut self.cjk_bracket,
        }
    }
}

/// Move the trimmed accumulator into `target` unless it is blank.
fn flush(buffer: &mut String, target: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        target.push(trimmed.to_string());
    }
    buffer.clear();
}

/// Parse a comic folder name into title and bracket segments.
///
/// - `""` → everything empty
/// - `"Foo"` → title `["Foo"]`
/// - `"Title [WriterName] (Genre1) (Genre2)"` → title `["Title"]`,
///   square `["WriterName"]`, round `["Genre1", "Genre2"]`
/// - `"[A] (B)"` → title `[]`
pub fn parse_comic_name(name: &str) -> ParsedName {
    let mut parsed = ParsedName::default();
    let mut buffer = String::new();
    let mut open: Option<BracketKind> = None;

    for c in name.chars() {
        match open {
            None => match BracketKind::opened_by(c) {
                Some(kind) => {
                    flush(&mut buffer, &mut parsed.title);
                    open = Some(kind);
                }
                None => buffer.push(c),
            },
            Some(kind) if c == kind.closing() => {
                flush(&mut buffer, parsed.segments_mut(kind));
                open = None;
            }
            Some(_) => buffer.push(c),
        }
    }

    // An unterminated bracket owns whatever is left in the buffer.
    if open.is_none() {
        flush(&mut buffer, &mut parsed.title);
    }

    parsed
}
