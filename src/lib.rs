mod block;
mod config;
mod error;
mod parser;
mod typst;

pub use block::{Block, BlockKind, ListItem, Span, plain_text};
pub use config::{Config, HeadingConfig, ListConfig, PageConfig, TextConfig};
pub use error::Error;
pub use parser::{classify, split_emphasis};

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Parse an article body into a vector of blocks.
pub fn parse(body: &str) -> Vec<Block> {
    parser::parse(body)
}

/// Convert an article body to Typst markup using default config.
pub fn article_to_typst(body: &str) -> String {
    article_to_typst_with_config(body, &Config::compiled_default())
}

/// Convert an article body to Typst markup with custom config.
pub fn article_to_typst_with_config(body: &str, config: &Config) -> String {
    let blocks = parse(body);
    typst::blocks_to_typst(&blocks, config)
}

/// Convert an article body to PDF bytes using default config.
pub fn article_to_pdf(body: &str) -> Result<Vec<u8>, Error> {
    article_to_pdf_with_config(body, &Config::compiled_default())
}

/// Convert an article body to PDF bytes with custom config.
pub fn article_to_pdf_with_config(body: &str, config: &Config) -> Result<Vec<u8>, Error> {
    use typst_library::layout::PagedDocument;

    let typst_content = article_to_typst_with_config(body, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Compile(format!("{:?}", e)))?;

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}

/// Convert an article body to pretty-printed JSON blocks.
pub fn article_to_json(body: &str) -> Result<String, Error> {
    let blocks = parse(body);
    Ok(serde_json::to_string_pretty(&blocks)?)
}

/// Convert an article body to plain text, numbering and bulleting list items.
pub fn article_to_text(body: &str) -> String {
    parse(body)
        .iter()
        .map(|block| match block {
            Block::NumberedList { items } => items
                .iter()
                .enumerate()
                .map(|(n, item)| format!("{}. {}", n + 1, item.plain_text()))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::BulletList { items } => items
                .iter()
                .map(|item| format!("- {}", item.plain_text()))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => block.plain_text(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
