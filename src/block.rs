use serde::Serialize;

/// A run of inline text, either plain or emphasized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A single numbered or bulleted list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Span>,
}

impl ListItem {
    pub fn plain_text(&self) -> String {
        spans_text(&self.content)
    }
}

/// Payload-free tag for each block kind, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    SectionHeading,
    MixedHeadingParagraph,
    NumberedList,
    BulletList,
    Paragraph,
}

/// Block-level elements parsed from an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A unit wrapped entirely in `**`, markers stripped.
    SectionHeading { text: String },
    /// A unit with `**` somewhere inside it.
    MixedHeadingParagraph { content: Vec<Span> },
    NumberedList { items: Vec<ListItem> },
    BulletList { items: Vec<ListItem> },
    Paragraph { text: String },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::SectionHeading { .. } => BlockKind::SectionHeading,
            Block::MixedHeadingParagraph { .. } => BlockKind::MixedHeadingParagraph,
            Block::NumberedList { .. } => BlockKind::NumberedList,
            Block::BulletList { .. } => BlockKind::BulletList,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Display text of this block with all markers consumed.
    ///
    /// List items are joined with a newline and carry no prefix.
    pub fn plain_text(&self) -> String {
        match self {
            Block::SectionHeading { text } | Block::Paragraph { text } => text.clone(),
            Block::MixedHeadingParagraph { content } => spans_text(content),
            Block::NumberedList { items } | Block::BulletList { items } => items
                .iter()
                .map(ListItem::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Display text of a whole block sequence, blocks separated by a blank line.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
