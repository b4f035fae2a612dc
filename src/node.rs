//! The neutral output tree produced by segmentation.
//!
//! Nodes are plain data. A rendering adapter (see [`crate::render`]) turns
//! them into whatever concrete display nodes a platform uses.
//!
//! The tree is at most two levels deep: root nodes are characters, line
//! breaks or word groups, and a word group only ever holds characters.

/// What a [`CharNode`] stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CharKind {
    /// A visible character (or grapheme cluster).
    Glyph,
    /// A literal space with a fixed advance width in pixels.
    Space { width: f32 },
}

/// A leaf display unit wrapping exactly one character.
#[derive(Clone, Debug, PartialEq)]
pub struct CharNode {
    /// The character this node displays.
    pub text: String,
    /// Node height, taken from the container font size.
    pub height: f32,
    /// Glyph or space.
    pub kind: CharKind,
}

impl CharNode {
    /// Create a glyph node.
    #[must_use]
    pub fn glyph(text: impl Into<String>, height: f32) -> Self {
        Self {
            text: text.into(),
            height,
            kind: CharKind::Glyph,
        }
    }

    /// Create a space node of the given advance width.
    #[must_use]
    pub fn space(height: f32, width: f32) -> Self {
        Self {
            text: " ".to_string(),
            height,
            kind: CharKind::Space { width },
        }
    }

    /// Check if this node stands in for a space.
    #[must_use]
    pub fn is_space(&self) -> bool {
        matches!(self.kind, CharKind::Space { .. })
    }

    /// Fixed width for space nodes, `None` for glyphs.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        match self.kind {
            CharKind::Space { width } => Some(width),
            CharKind::Glyph => None,
        }
    }
}

/// A run of characters that must move (and wrap) together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordGroup {
    pub chars: Vec<CharNode>,
}

impl WordGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the group has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Concatenated text of the group.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.text.as_str()).collect()
    }
}

/// A root-level node appended to a container.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A single character (glyph or space) directly in the container.
    Char(CharNode),
    /// Zero-width separator standing in for `\n`.
    LineBreak,
    /// A group of characters kept on one line.
    Group(WordGroup),
}

impl Node {
    /// Number of character nodes this node holds.
    #[must_use]
    pub fn char_count(&self) -> usize {
        match self {
            Self::Char(_) => 1,
            Self::LineBreak => 0,
            Self::Group(group) => group.len(),
        }
    }

    /// Check if this is a line break marker.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }
}

/// Address of a character node inside a container.
///
/// `node` indexes the container's root children; `child` indexes into a
/// word group when the character is grouped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharPath {
    pub node: usize,
    pub child: Option<usize>,
}

impl CharPath {
    /// Path to a root-level character.
    #[must_use]
    pub const fn root(node: usize) -> Self {
        Self { node, child: None }
    }

    /// Path to a character inside a word group.
    #[must_use]
    pub const fn grouped(node: usize, child: usize) -> Self {
        Self {
            node,
            child: Some(child),
        }
    }
}

/// Collect the paths of every character node, in document order.
///
/// `base` is the number of root children the container already held before
/// `nodes` were appended.
#[must_use]
pub fn char_paths(nodes: &[Node], base: usize) -> Vec<CharPath> {
    let mut paths = Vec::with_capacity(nodes.iter().map(Node::char_count).sum());
    for (offset, node) in nodes.iter().enumerate() {
        let index = base + offset;
        match node {
            Node::Char(_) => paths.push(CharPath::root(index)),
            Node::LineBreak => {}
            Node::Group(group) => {
                paths.extend((0..group.len()).map(|child| CharPath::grouped(index, child)));
            }
        }
    }
    paths
}

/// Iterate over every character node in document order.
pub fn chars(nodes: &[Node]) -> impl Iterator<Item = &CharNode> {
    nodes.iter().flat_map(|node| {
        let slice: &[CharNode] = match node {
            Node::Char(c) => std::slice::from_ref(c),
            Node::LineBreak => &[],
            Node::Group(group) => &group.chars,
        };
        slice.iter()
    })
}

/// Rebuild the source text, mapping line break markers back to `\n`.
#[must_use]
pub fn to_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Char(c) => out.push_str(&c.text),
            Node::LineBreak => out.push('\n'),
            Node::Group(group) => {
                for c in &group.chars {
                    out.push_str(&c.text);
                }
            }
        }
    }
    out
}

/// Count word groups among the root nodes.
#[must_use]
pub fn group_count(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .filter(|node| matches!(node, Node::Group(_)))
        .count()
}
