//! Monospace line fitting.
//!
//! Lays segmented nodes out on lines of a fixed number of display columns,
//! the way a browser wraps inline-block spans: a word group moves to the
//! next line as a whole, and is only broken up when it is wider than a full
//! line by itself.

use crate::node::{CharNode, Node};
use unicode_width::UnicodeWidthStr;

/// Display columns taken by a character node. Spaces take one column.
#[must_use]
pub fn node_columns(c: &CharNode) -> usize {
    if c.is_space() {
        1
    } else {
        UnicodeWidthStr::width(c.text.as_str())
    }
}

struct Lines {
    width: usize,
    lines: Vec<String>,
    current: String,
    col: usize,
}

impl Lines {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: String::new(),
            col: 0,
        }
    }

    fn fits(&self, cols: usize) -> bool {
        self.width == 0 || self.col + cols <= self.width
    }

    fn newline(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.col = 0;
    }

    fn place(&mut self, c: &CharNode) {
        let cols = node_columns(c);
        if !self.fits(cols) && self.col > 0 {
            self.newline();
            // A space that caused the wrap is swallowed.
            if c.is_space() {
                return;
            }
        }
        self.current.push_str(&c.text);
        self.col += cols;
    }

    fn finish(mut self) -> Vec<String> {
        self.lines.push(self.current);
        self.lines
    }
}

/// Fit nodes onto lines of `width` columns (`0` means unlimited).
///
/// Line break markers always start a new line. Empty input yields no lines.
#[must_use]
pub fn fit_columns(nodes: &[Node], width: usize) -> Vec<String> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let mut lines = Lines::new(width);
    for node in nodes {
        match node {
            Node::Char(c) => lines.place(c),
            Node::LineBreak => lines.newline(),
            Node::Group(group) => {
                let cols: usize = group.chars.iter().map(node_columns).sum();
                if !lines.fits(cols) && lines.col > 0 && (width == 0 || cols <= width) {
                    lines.newline();
                }
                for c in &group.chars {
                    lines.place(c);
                }
            }
        }
    }
    lines.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{SplitMode, SplitOptions, split};

    fn fit(mode: SplitMode, text: &str, width: usize) -> Vec<String> {
        fit_columns(&split(text, &SplitOptions::new(mode)), width)
    }

    #[test]
    fn test_latin_words_wrap_whole() {
        assert_eq!(fit(SplitMode::Latin, "hello world", 8), ["hello ", "world"]);
        assert_eq!(fit(SplitMode::Ungrouped, "hello world", 8), ["hello wo", "rld"]);
    }

    #[test]
    fn test_overlong_group_breaks() {
        assert_eq!(fit(SplitMode::Latin, "abcdef", 4), ["abcd", "ef"]);
    }

    #[test]
    fn test_kinsoku_keeps_closing_bracket_attached() {
        // Each kana is two columns wide.
        assert_eq!(fit(SplitMode::Kinsoku, "あいう。", 6), ["あい", "う。"]);
        assert_eq!(fit(SplitMode::Ungrouped, "あいう。", 6), ["あいう", "。"]);
    }

    #[test]
    fn test_line_breaks_and_unlimited_width() {
        assert_eq!(fit(SplitMode::Latin, "a b\nc", 0), ["a b", "c"]);
        assert!(fit(SplitMode::Latin, "", 10).is_empty());
        assert_eq!(fit(SplitMode::Latin, "x\n", 10), ["x", ""]);
    }
}
