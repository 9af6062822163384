//! Line-oriented text assembly.
//!
//! Every generated artifact is built from ordered fragments. A fragment is a
//! single line, an explicit blank, or a previously assembled [`TextBlock`]
//! spliced in line by line.
//!
//! Rules applied to every rendered line:
//! - empty or whitespace-only lines become an empty line (no trailing spaces)
//! - non-empty lines are left-padded with the assembler's indentation
//! - every line ends with `\n`

use std::fmt;

use crate::domain::error::DomainError;

/// One unit of input to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single line of content. Must not contain line breaks.
    Line(String),
    /// An explicit empty line.
    Blank,
    /// Already assembled text, spliced in line by line.
    Block(TextBlock),
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Line(s.to_owned())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Line(s)
    }
}

impl From<Option<&str>> for Fragment {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Fragment::Blank, Fragment::from)
    }
}

impl From<TextBlock> for Fragment {
    fn from(block: TextBlock) -> Self {
        Fragment::Block(block)
    }
}

/// Immutable block of assembled text. Each line is `\n`-terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextBlock(String);

impl TextBlock {
    /// The empty block. Splicing it contributes no lines.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TextBlock {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builder collecting fragments for one [`TextBlock`].
///
/// ```
/// use storegen_core::domain::TextAssembler;
///
/// let body = TextAssembler::indented(4)
///     .line("@Getter")
///     .line("private final Repo repository;")
///     .build()
///     .unwrap();
/// assert_eq!(body.as_str(), "    @Getter\n    private final Repo repository;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextAssembler {
    indent: usize,
    fragments: Vec<Fragment>,
}

impl TextAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler that pads every non-empty line with `width` spaces.
    pub fn indented(width: usize) -> Self {
        Self {
            indent: width,
            fragments: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Line(line.into()));
        self
    }

    pub fn blank(mut self) -> Self {
        self.fragments.push(Fragment::Blank);
        self
    }

    pub fn block(mut self, block: TextBlock) -> Self {
        self.fragments.push(Fragment::Block(block));
        self
    }

    /// Append any fragment-like value.
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragments
            .extend(lines.into_iter().map(|l| Fragment::Line(l.into())));
        self
    }

    pub fn build(self) -> Result<TextBlock, DomainError> {
        assemble(&self.fragments, self.indent)
    }
}

/// Render `fragments` into a block, one line per fragment.
///
/// Fails fast with [`DomainError::MalformedFragment`] when a `Line` holds a
/// line break; the error carries the whole fragment list.
pub fn assemble(fragments: &[Fragment], indent: usize) -> Result<TextBlock, DomainError> {
    let padding = " ".repeat(indent);
    let mut buf = String::new();

    for (index, fragment) in fragments.iter().enumerate() {
        match fragment {
            Fragment::Line(line) => {
                if line.contains(['\n', '\r']) {
                    return Err(DomainError::MalformedFragment {
                        index,
                        fragments: fragments.iter().map(|f| format!("{f:?}")).collect(),
                    });
                }
                push_line(&mut buf, &padding, line);
            }
            Fragment::Blank => buf.push('\n'),
            Fragment::Block(block) => {
                for line in block.lines() {
                    push_line(&mut buf, &padding, line);
                }
            }
        }
    }

    Ok(TextBlock(buf))
}

fn push_line(buf: &mut String, padding: &str, line: &str) {
    if !line.trim().is_empty() {
        buf.push_str(padding);
        buf.push_str(line);
    }
    buf.push('\n');
}
