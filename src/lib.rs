//! `theatre_text` - language-aware text segmentation for dialogue animation
//!
//! Splits a chat line into per-character nodes so an animation layer can
//! stagger entrance and idle effects over them without reflowing the text.
//! Characters are grouped so that lines still wrap correctly: Latin text
//! keeps words together, Japanese and Chinese follow Kinsoku Shori, and
//! Korean follows its own line-breaking punctuation rules.
//!
//! The output is a neutral tree of [`Node`]s; adapters in [`render`] turn it
//! into HTML or a monospace preview, and [`flyin`] schedules entrances.
//!
//! ```
//! use theatre_text::{SplitMode, SplitOptions, split, render::outline};
//!
//! let nodes = split("「はい」", &SplitOptions::new(SplitMode::Kinsoku));
//! assert_eq!(outline(&nodes), "group \"「は\"\ngroup \"い」\"");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional index casts
#![allow(clippy::cast_precision_loss)] // Intentional for keyframe math
#![allow(clippy::module_name_repetitions)] // Allow split::SplitMode etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::float_cmp)] // Exact float comparisons in tests are intentional

pub mod error;
pub mod event;
pub mod flyin;
pub mod node;
pub mod render;
pub mod split;
pub mod surface;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use flyin::{CharTiming, FlyinPlan, FlyinStyle, Keyframe};
pub use node::{CharKind, CharNode, CharPath, Node, WordGroup};
pub use split::{SplitMode, SplitOptions, SplitUnit, segment, segment_with, split};
pub use surface::{Container, TextSurface, parse_font_size};
