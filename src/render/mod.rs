//! Rendering adapters over the segmented node tree.
//!
//! - [`html`]: span/div markup matching the overlay DOM
//! - [`tree`]: deterministic text outline for debugging and snapshots
//! - [`columns`]: monospace line fitting that keeps word groups intact

pub mod columns;
pub mod html;
pub mod tree;

pub use columns::fit_columns;
pub use html::{to_html, write_html};
pub use tree::outline;
