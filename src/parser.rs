use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, BlockKind, ListItem, Span};

/// Doubled delimiter bracketing emphasized text
const MARKER: &str = "**";
const BULLET_PREFIX: &str = "- ";
const UNIT_SEPARATOR: &str = "\n\n";

// First line of a numbered list: `12. `
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("Static regex did not compile."));
// Prefix stripped from each numbered item
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Static regex did not compile."));

/// Parse an article body into a list of blocks.
///
/// Units are separated by a blank line. Units that are empty after
/// trimming produce nothing. Never fails: anything unrecognised ends up
/// as a [`Block::Paragraph`].
pub fn parse(body: &str) -> Vec<Block> {
    let body = body.replace("\r\n", "\n");

    let blocks: Vec<Block> = body
        .split(UNIT_SEPARATOR)
        .enumerate()
        .filter_map(|(index, unit)| {
            let block = parse_unit(unit)?;
            log::trace!("unit {index} classified as {:?}", block.kind());
            Some(block)
        })
        .collect();

    log::debug!(
        "parsed {} blocks from {} bytes of article text",
        blocks.len(),
        body.len()
    );
    blocks
}

/// Decide which kind of block a paragraph unit becomes.
///
/// Rules are tried in order and the first match wins: fully wrapped
/// heading, numbered list, bullet list, mixed emphasis, plain paragraph.
/// Returns `None` for a blank unit.
pub fn classify(unit: &str) -> Option<BlockKind> {
    let unit = unit.trim();
    if unit.is_empty() {
        return None;
    }
    let first_line = unit.lines().next().unwrap_or_default();

    let kind = if wrapped_heading(unit).is_some() {
        BlockKind::SectionHeading
    } else if NUMBERED_LINE.is_match(first_line) {
        BlockKind::NumberedList
    } else if first_line.starts_with(BULLET_PREFIX) {
        BlockKind::BulletList
    } else if unit.contains(MARKER) {
        BlockKind::MixedHeadingParagraph
    } else {
        BlockKind::Paragraph
    };
    Some(kind)
}

/// Split text on the emphasis marker into alternating plain and
/// emphasized spans.
///
/// Even fragments are plain and are dropped when blank. Odd fragments
/// are emphasized and are dropped only when empty. An unterminated
/// marker leaves the trailing text emphasized.
pub fn split_emphasis(text: &str) -> Vec<Span> {
    text.split(MARKER)
        .enumerate()
        .filter_map(|(index, fragment)| {
            if index % 2 == 0 {
                (!fragment.trim().is_empty()).then(|| Span::plain(fragment))
            } else {
                (!fragment.is_empty()).then(|| Span::emphasized(fragment))
            }
        })
        .collect()
}

fn parse_unit(unit: &str) -> Option<Block> {
    let unit = unit.trim();

    let block = match classify(unit)? {
        BlockKind::SectionHeading => Block::SectionHeading {
            text: wrapped_heading(unit).unwrap_or(unit).trim().to_string(),
        },
        BlockKind::NumberedList => Block::NumberedList {
            items: list_items(unit, |line| Some(strip_number(line))),
        },
        BlockKind::BulletList => Block::BulletList {
            items: list_items(unit, |line| line.strip_prefix(BULLET_PREFIX)),
        },
        BlockKind::MixedHeadingParagraph => Block::MixedHeadingParagraph {
            content: split_emphasis(unit),
        },
        BlockKind::Paragraph => Block::Paragraph {
            text: unit.to_string(),
        },
    };
    Some(block)
}

/// Inner text of a unit wrapped in exactly one pair of markers.
fn wrapped_heading(unit: &str) -> Option<&str> {
    let inner = unit.strip_prefix(MARKER)?.strip_suffix(MARKER)?;
    if inner.trim().is_empty() || inner.contains(MARKER) {
        return None;
    }
    Some(inner)
}

fn strip_number(line: &str) -> &str {
    NUMBER_PREFIX
        .find(line)
        .map_or(line, |prefix| &line[prefix.end()..])
}

fn list_items<'a>(
    unit: &'a str,
    item_text: impl Fn(&'a str) -> Option<&'a str>,
) -> Vec<ListItem> {
    unit.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(item_text)
        .map(|text| ListItem {
            content: split_emphasis(text),
        })
        .collect()
}
