//! Host containers that receive segmented nodes.

use crate::node::{CharNode, CharPath, Node};

/// A rectangular text-display surface that segmented nodes are appended to.
///
/// The surface owns appended nodes. Segmentation reads the font size once,
/// appends, and keeps no reference to the surface afterwards.
pub trait TextSurface {
    /// Computed CSS font size, e.g. `"24px"`. `None` when unavailable.
    fn computed_font_size(&self) -> Option<&str>;

    /// Number of root children currently held.
    fn child_count(&self) -> usize;

    /// Append a root node.
    fn append(&mut self, node: Node);
}

/// Parse a computed font size leniently.
///
/// The leading decimal number is used and any unit is ignored
/// (`"24px"` is `24.0`). Anything unparseable, negative or non-finite
/// degrades to `0.0`.
#[must_use]
pub fn parse_font_size(value: &str) -> f32 {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in value.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            '+' if idx == 0 => end = 1,
            _ => break,
        }
    }
    match value[..end].parse::<f32>() {
        Ok(size) if size.is_finite() && size >= 0.0 => size,
        _ => 0.0,
    }
}

/// Font size of a surface, `0.0` when absent or unparseable.
#[must_use]
pub fn font_size_of<S: TextSurface + ?Sized>(surface: &S) -> f32 {
    surface.computed_font_size().map_or(0.0, parse_font_size)
}

/// In-memory container, usable as a headless surface and in tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    font_size: Option<String>,
    children: Vec<Node>,
}

impl Container {
    /// Create an empty container with no font size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with a computed font size such as `"24px"`.
    #[must_use]
    pub fn with_font_size(font_size: impl Into<String>) -> Self {
        Self {
            font_size: Some(font_size.into()),
            children: Vec::new(),
        }
    }

    /// Root children in append order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Resolve a character path.
    #[must_use]
    pub fn char_at(&self, path: CharPath) -> Option<&CharNode> {
        match (self.children.get(path.node)?, path.child) {
            (Node::Char(c), None) => Some(c),
            (Node::Group(group), Some(child)) => group.chars.get(child),
            _ => None,
        }
    }

    /// Resolve a character path mutably.
    pub fn char_at_mut(&mut self, path: CharPath) -> Option<&mut CharNode> {
        match (self.children.get_mut(path.node)?, path.child) {
            (Node::Char(c), None) => Some(c),
            (Node::Group(group), Some(child)) => group.chars.get_mut(child),
            _ => None,
        }
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Take the children out, leaving the container empty.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}

impl TextSurface for Container {
    fn computed_font_size(&self) -> Option<&str> {
        self.font_size.as_deref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn append(&mut self, node: Node) {
        self.children.push(node);
    }
}
