//! Property-based tests for article parsing
//!
//! The parser is total: every input yields a block sequence, units with no
//! markup fall back to paragraphs, and block order follows the source.

use article_blocks::{Block, BlockKind, parse};
use proptest::prelude::*;

/// Words with no markers, no digits and no dashes
fn prose_unit_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z][a-zA-Z ,!?']{0,15}", 1..4).prop_map(|lines| lines.join("\n"))
}

/// A unit that triggers the given rule
fn unit_for(kind: BlockKind, word: &str) -> String {
    match kind {
        BlockKind::SectionHeading => format!("**{word}**"),
        BlockKind::MixedHeadingParagraph => format!("Intro **{word}** end"),
        BlockKind::NumberedList => format!("1. {word}\n2. {word}"),
        BlockKind::BulletList => format!("- {word}\n- {word}"),
        BlockKind::Paragraph => word.to_string(),
    }
}

fn kind_strategy() -> impl Strategy<Value = BlockKind> {
    prop_oneof![
        Just(BlockKind::SectionHeading),
        Just(BlockKind::MixedHeadingParagraph),
        Just(BlockKind::NumberedList),
        Just(BlockKind::BulletList),
        Just(BlockKind::Paragraph),
    ]
}

proptest! {
    #[test]
    fn never_panics(body in any::<String>()) {
        let _ = parse(&body);
    }

    #[test]
    fn never_panics_on_markup_soup(body in "[*\\-0-9. \\n\\r]{0,64}") {
        for block in parse(&body) {
            // Blocks never carry an empty heading
            if let Block::SectionHeading { text } = block {
                prop_assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn plain_units_are_paragraphs(unit in prose_unit_strategy()) {
        let blocks = parse(&unit);
        let trimmed = unit.trim();
        if trimmed.is_empty() {
            prop_assert!(blocks.is_empty());
        } else {
            prop_assert_eq!(blocks, vec![Block::Paragraph { text: trimmed.to_string() }]);
        }
    }

    #[test]
    fn block_order_follows_units(
        kinds in prop::collection::vec(kind_strategy(), 1..10),
        word in "[a-z]{1,8}",
    ) {
        let body = kinds
            .iter()
            .map(|kind| unit_for(*kind, &word))
            .collect::<Vec<_>>()
            .join("\n\n");

        let parsed: Vec<BlockKind> = parse(&body).iter().map(Block::kind).collect();
        prop_assert_eq!(parsed, kinds);
    }

    #[test]
    fn markers_never_reach_plain_text(
        kinds in prop::collection::vec(kind_strategy(), 1..6),
        word in "[a-z]{1,8}",
    ) {
        let body = kinds
            .iter()
            .map(|kind| unit_for(*kind, &word))
            .collect::<Vec<_>>()
            .join("\n\n");

        prop_assert!(!article_blocks::plain_text(&parse(&body)).contains("**"));
    }
}
