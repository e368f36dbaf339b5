//! Terminal rendering of the violation list.
//!
//! Rendering is pure string building; callers decide where the text goes.
//! Grouping and sorting here are presentation-only: the engine's emission
//! order is preserved as the tie-break within equal lines.

#![forbid(unsafe_code)]

mod summary;
mod text;

pub use summary::render_summary;
pub use text::render_report;
