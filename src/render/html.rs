//! HTML markup for segmented text.
//!
//! Every character becomes an inline-block `span` sized to the font, word
//! groups become `div.tt-word` wrappers and line breaks become `<br>`.

use crate::error::Result;
use crate::node::{CharKind, CharNode, Node};
use std::fmt::Write as _;
use std::io::Write;

/// CSS class of a character span.
pub const CHAR_CLASS: &str = "tt-char";
/// CSS class of a word group wrapper.
pub const WORD_CLASS: &str = "tt-word";

/// Render nodes to an HTML string.
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Char(c) => push_char(&mut out, c),
            Node::LineBreak => out.push_str("<br>"),
            Node::Group(group) => {
                let _ = write!(out, "<div class=\"{WORD_CLASS}\">");
                for c in &group.chars {
                    push_char(&mut out, c);
                }
                out.push_str("</div>");
            }
        }
    }
    out
}

/// Render nodes as HTML into a writer.
pub fn write_html<W: Write + ?Sized>(out: &mut W, nodes: &[Node]) -> Result<()> {
    out.write_all(to_html(nodes).as_bytes())?;
    Ok(())
}

fn push_char(out: &mut String, c: &CharNode) {
    match c.kind {
        CharKind::Glyph => {
            let _ = write!(
                out,
                "<span class=\"{CHAR_CLASS}\" style=\"height:{}px\">",
                c.height
            );
            push_escaped(out, &c.text);
        }
        CharKind::Space { width } => {
            let _ = write!(
                out,
                "<span class=\"{CHAR_CLASS}\" style=\"height:{}px;width:{width}px\">&nbsp;",
                c.height
            );
        }
    }
    out.push_str("</span>");
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
