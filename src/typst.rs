use crate::block::{Block, ListItem, Span};
use crate::config::Config;

/// Convert blocks to Typst markup
pub fn blocks_to_typst(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();
    emit_preamble(config, &mut out);

    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];

        match block {
            Block::SectionHeading { text } if config.headings.keep_with_next => {
                // Keep heading with following content using a block that prevents breaks
                out.push_str("#block(breakable: false)[\n");
                emit_heading(text, config, &mut out);

                if i + 1 < blocks.len() {
                    i += 1;
                    emit_block(&blocks[i], config, &mut out);
                }
                out.push_str("]\n\n");
            }
            _ => {
                emit_block(block, config, &mut out);
            }
        }

        i += 1;
    }

    out
}

fn emit_preamble(config: &Config, out: &mut String) {
    out.push_str("#set par(linebreaks: \"optimized\")\n");
    out.push_str("#set page(paper: ");
    string_literal_into(&config.page.paper, out);
    if config.page.numbers {
        out.push_str(", numbering: \"1\"");
    }
    out.push_str(")\n");
    out.push_str(&format!("#set text(size: {})\n\n", config.text.size));
}

fn emit_heading(text: &str, config: &Config, out: &mut String) {
    out.push_str(&"=".repeat(config.headings.depth()));
    out.push(' ');
    // A Typst heading ends at the first newline
    escape_into(&text.replace('\n', " "), out);
    out.push_str("\n\n");
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::SectionHeading { text } => {
            emit_heading(text, config, out);
        }
        Block::MixedHeadingParagraph { content } => {
            spans_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::NumberedList { items } => {
            emit_list(items, "+", config, out);
        }
        Block::BulletList { items } => {
            emit_list(items, "-", config, out);
        }
        Block::Paragraph { text } => {
            escape_into(text, out);
            out.push_str("\n\n");
        }
    }
}

fn emit_list(items: &[ListItem], prefix: &str, config: &Config, out: &mut String) {
    if items.is_empty() {
        return;
    }
    // Short lists stay on one page, long ones may break
    let keep_together = items.len() <= config.lists.keep_together_max;
    if keep_together {
        out.push_str("#block(breakable: false)[\n");
    }
    for item in items {
        out.push_str(prefix);
        out.push(' ');
        spans_to_typst(&item.content, out);
        out.push('\n');
    }
    if keep_together {
        out.push_str("]\n\n");
    } else {
        out.push('\n');
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    let mut after_call = false;
    for span in spans {
        if span.emphasized {
            out.push_str("#strong[");
            escape_into(&span.text, out);
            out.push(']');
            after_call = true;
        } else {
            // `.` or `(` right after `#strong[..]` continues the call expression
            let text = match span.text.strip_prefix(['.', '(']) {
                Some(rest) if after_call => {
                    out.push('\\');
                    out.push_str(&span.text[..1]);
                    rest
                }
                _ => span.text.as_str(),
            };
            escape_into(text, out);
            after_call = false;
        }
    }
}

fn string_literal_into(value: &str, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Escape text so Typst reads it literally.
fn escape_into(text: &str, out: &mut String) {
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let body = line.trim_start();
        out.push_str(&line[..line.len() - body.len()]);

        // `1.` at line start is an enum item in Typst
        let digits = body.chars().take_while(char::is_ascii_digit).count();
        let rest = if digits > 0 && body[digits..].starts_with('.') {
            out.push_str(&body[..digits]);
            out.push_str("\\.");
            &body[digits + 1..]
        } else {
            body
        };

        for (pos, ch) in rest.char_indices() {
            let line_start = pos == 0 && digits == 0;
            match ch {
                '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' => {
                    out.push('\\');
                    out.push(ch);
                }
                '=' | '-' | '+' if line_start => {
                    out.push('\\');
                    out.push(ch);
                }
                _ => out.push(ch),
            }
        }
    }
}
