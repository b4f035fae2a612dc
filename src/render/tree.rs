//! Plain-text outline of a node tree.

use crate::node::{CharNode, Node};
use std::fmt::Write as _;

/// Render a deterministic outline, one node per line.
///
/// ```
/// use theatre_text::render::outline;
/// use theatre_text::{SplitMode, SplitOptions, split};
///
/// let nodes = split("hi you", &SplitOptions::new(SplitMode::Latin));
/// assert_eq!(outline(&nodes), "group \"hi\"\nspace\ngroup \"you\"");
/// ```
#[must_use]
pub fn outline(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        if !out.is_empty() {
            out.push('\n');
        }
        match node {
            Node::Char(c) => push_char(&mut out, c),
            Node::LineBreak => out.push_str("break"),
            Node::Group(group) => {
                let _ = write!(out, "group {:?}", group.text());
            }
        }
    }
    out
}

/// Like [`outline`], but also lists the characters of every group.
#[must_use]
pub fn outline_expanded(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        if !out.is_empty() {
            out.push('\n');
        }
        match node {
            Node::Char(c) => push_char(&mut out, c),
            Node::LineBreak => out.push_str("break"),
            Node::Group(group) => {
                out.push_str("group");
                for c in &group.chars {
                    out.push_str("\n  ");
                    push_char(&mut out, c);
                }
            }
        }
    }
    out
}

fn push_char(out: &mut String, c: &CharNode) {
    if c.is_space() {
        out.push_str("space");
    } else {
        let _ = write!(out, "char {:?}", c.text);
    }
}
