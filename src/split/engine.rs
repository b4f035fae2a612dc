//! The four segmentation strategies.

use super::classes::{CharClass, Ruleset};
use super::options::{SplitMode, SplitOptions, SplitUnit};
use crate::node::{CharNode, Node, WordGroup};
use unicode_segmentation::UnicodeSegmentation;

/// One input unit after newline/space detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit<'a> {
    Newline,
    Space,
    Text(&'a str),
}

impl<'a> Unit<'a> {
    fn from_slice(s: &'a str) -> Self {
        match s {
            "\n" => Self::Newline,
            " " => Self::Space,
            _ => Self::Text(s),
        }
    }

    /// Scalar used for classification.
    fn lead(self) -> Option<char> {
        match self {
            Self::Newline => Some('\n'),
            Self::Space => Some(' '),
            Self::Text(s) => s.chars().next(),
        }
    }
}

fn units(text: &str, unit: SplitUnit) -> Vec<Unit<'_>> {
    match unit {
        SplitUnit::Char => text
            .char_indices()
            .map(|(idx, ch)| Unit::from_slice(&text[idx..idx + ch.len_utf8()]))
            .collect(),
        SplitUnit::Grapheme => {
            let mut out = Vec::new();
            for cluster in text.graphemes(true) {
                if cluster == "\r\n" {
                    out.push(Unit::Text("\r"));
                    out.push(Unit::Newline);
                } else {
                    out.push(Unit::from_slice(cluster));
                }
            }
            out
        }
    }
}

/// Accumulates root nodes and the currently open word group.
struct Builder {
    nodes: Vec<Node>,
    group: Option<WordGroup>,
    height: f32,
    space_width: f32,
}

impl Builder {
    fn new(options: &SplitOptions, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            group: None,
            height: options.font_size,
            space_width: options.space_width(),
        }
    }

    fn space(&self) -> CharNode {
        CharNode::space(self.height, self.space_width)
    }

    fn glyph(&self, text: &str) -> CharNode {
        CharNode::glyph(text, self.height)
    }

    fn push_root(&mut self, node: CharNode) {
        self.nodes.push(Node::Char(node));
    }

    /// Push into the open group, opening one if needed.
    fn push_grouped(&mut self, node: CharNode) {
        self.group.get_or_insert_with(WordGroup::new).chars.push(node);
    }

    /// Push into the open group if there is one, else at the root.
    fn push_open(&mut self, node: CharNode) {
        match self.group.as_mut() {
            Some(group) => group.chars.push(node),
            None => self.push_root(node),
        }
    }

    fn open_group(&mut self) {
        if self.group.is_none() {
            self.group = Some(WordGroup::new());
        }
    }

    fn group_len(&self) -> usize {
        self.group.as_ref().map_or(0, WordGroup::len)
    }

    fn flush(&mut self) {
        if let Some(group) = self.group.take() {
            if !group.is_empty() {
                self.nodes.push(Node::Group(group));
            }
        }
    }

    fn line_break(&mut self) {
        self.flush();
        self.nodes.push(Node::LineBreak);
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush();
        self.nodes
    }
}

/// Segment `text` into root nodes without touching any container.
///
/// This is the pure core of [`crate::segment`]: for a fixed text and
/// options the result is always the same.
#[must_use]
pub fn split(text: &str, options: &SplitOptions) -> Vec<Node> {
    if text.is_empty() {
        return Vec::new();
    }
    let units = units(text, options.unit);
    let mut builder = Builder::new(options, units.len());
    match options.mode {
        SplitMode::Ungrouped => split_ungrouped(&units, &mut builder),
        SplitMode::Latin => split_latin(&units, &mut builder),
        SplitMode::Kinsoku => split_lookahead(&units, &mut builder, Ruleset::Kinsoku),
        SplitMode::Korean => split_lookahead(&units, &mut builder, Ruleset::Korean),
    }
    builder.finish()
}

fn split_ungrouped(units: &[Unit<'_>], builder: &mut Builder) {
    for &unit in units {
        match unit {
            Unit::Newline => builder.line_break(),
            Unit::Space => {
                let node = builder.space();
                builder.push_root(node);
            }
            Unit::Text(s) => {
                let node = builder.glyph(s);
                builder.push_root(node);
            }
        }
    }
}

fn split_latin(units: &[Unit<'_>], builder: &mut Builder) {
    for &unit in units {
        match unit {
            Unit::Newline => builder.line_break(),
            Unit::Space => {
                builder.flush();
                let node = builder.space();
                builder.push_root(node);
            }
            Unit::Text(s) => {
                let node = builder.glyph(s);
                builder.push_grouped(node);
            }
        }
    }
}

/// Kinsoku Shori and Korean line breaking share one skeleton: a group opens
/// when the current/next pair must not be separated, and closes once it
/// holds two or more characters and the pair no longer binds.
fn split_lookahead(units: &[Unit<'_>], builder: &mut Builder, ruleset: Ruleset) {
    for (idx, &unit) in units.iter().enumerate() {
        match unit {
            Unit::Newline => {
                builder.line_break();
                continue;
            }
            Unit::Space if ruleset == Ruleset::Kinsoku => {
                builder.flush();
                let node = builder.space();
                builder.push_root(node);
                continue;
            }
            _ => {}
        }

        let next = units.get(idx + 1).copied();
        let binds = binds_to_next(ruleset, unit, next);
        if binds {
            builder.open_group();
        }
        let node = match unit {
            Unit::Text(s) => builder.glyph(s),
            _ => builder.space(),
        };
        builder.push_open(node);
        if !binds && builder.group_len() >= 2 {
            builder.flush();
        }
    }
}

fn binds_to_next(ruleset: Ruleset, current: Unit<'_>, next: Option<Unit<'_>>) -> bool {
    let classify = |unit: Unit<'_>| {
        unit.lead()
            .map_or(CharClass::empty(), |ch| ruleset.classify(ch))
    };
    let cur = classify(current);
    let nxt = next.map_or(CharClass::empty(), classify);

    nxt.contains(CharClass::NO_LINE_START)
        || cur.contains(CharClass::NO_LINE_END)
        || (cur.contains(CharClass::INSEPARABLE) && next == Some(current))
        || (cur.contains(CharClass::DIGIT) && nxt.contains(CharClass::DIGIT))
}
