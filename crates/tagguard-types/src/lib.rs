//! Stable DTOs and IDs used across the tagguard workspace.
//!
//! This crate is intentionally boring:
//! - the canonical resource/tag model shared by extractors and the engine
//! - the violation type emitted by the engine
//! - stable string IDs
//! - canonical forward-slash path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod location;
pub mod path;
pub mod resource;
pub mod violation;

pub use location::{Location, Span};
pub use path::SrcPath;
pub use resource::{ParseResult, Resource, SourceError, TagMap};
pub use violation::Violation;
