//! Language-aware text segmentation.
//!
//! Breaks a chat string into per-character nodes so an animation layer can
//! stagger transitions over them without reflowing the text. The strategy
//! depends on the interface language:
//!
//! | Language code | Mode | Strategy |
//! |---|---|---|
//! | `ja`, `cn` | [`SplitMode::Kinsoku`] | Kinsoku Shori line-break avoidance |
//! | `ko` | [`SplitMode::Korean`] | Korean line breaking |
//! | `zh`, `th` | [`SplitMode::Ungrouped`] | one node per character |
//! | anything else | [`SplitMode::Latin`] | characters grouped into words |
//!
//! # Examples
//!
//! ```
//! use theatre_text::{Container, Node, segment};
//!
//! let mut container = Container::with_font_size("24px");
//! let chars = segment("hello world", "en", &mut container);
//!
//! assert_eq!(chars.len(), 11);
//! assert!(matches!(container.children()[0], Node::Group(_)));
//! assert_eq!(container.char_at(chars[0]).map(|c| c.height), Some(24.0));
//! ```

mod classes;
mod engine;
mod options;

pub use classes::{CharClass, Ruleset};
pub use engine::split;
pub use options::{
    DEFAULT_LANGUAGE, DEFAULT_SPACE_RATIO, SplitMode, SplitOptions, SplitUnit, env_language,
    language_from_locale,
};

use crate::event::{LogLevel, emit_event, emit_log_with};
use crate::node::{CharPath, char_paths, group_count};
use crate::surface::{TextSurface, font_size_of};

/// Segment `text` into `surface` using the strategy for `language`.
///
/// Nodes are appended after any existing content; clearing the surface is
/// the caller's job. Returns the paths of every character node (spaces
/// included, line breaks excluded) in reading order.
pub fn segment<S>(text: &str, language: &str, surface: &mut S) -> Vec<CharPath>
where
    S: TextSurface + ?Sized,
{
    segment_with(text, &SplitOptions::for_language(language), surface)
}

/// Segment `text` into `surface` with explicit options.
///
/// The node height always comes from the surface's computed font size;
/// `options.font_size` is ignored.
pub fn segment_with<S>(text: &str, options: &SplitOptions, surface: &mut S) -> Vec<CharPath>
where
    S: TextSurface + ?Sized,
{
    let options = options.with_font_size(font_size_of(&*surface));
    let nodes = split(text, &options);
    let paths = char_paths(&nodes, surface.child_count());

    emit_log_with(LogLevel::Debug, || {
        format!(
            "segmented {} chars into {} nodes ({} groups) mode={} unit={:?}",
            paths.len(),
            nodes.len(),
            group_count(&nodes),
            options.mode,
            options.unit,
        )
    });
    if !nodes.is_empty() {
        emit_event("segment", options.mode.name());
    }

    for node in nodes {
        surface.append(node);
    }
    paths
}
