use crate::{Location, SrcPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag key/value mapping. `BTreeMap` keeps iteration lexicographic, which the
/// engine relies on for deterministic violation order in the pattern check.
pub type TagMap = BTreeMap<String, String>;

/// One infrastructure declaration with a type, a local name, and a tag
/// mapping.
///
/// Invariant: `resource_type` and `name` are never empty. Extractors drop any
/// candidate they cannot derive both for instead of emitting a malformed
/// value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_type: String,
    pub name: String,
    pub tags: TagMap,
    pub location: Location,
    /// Mirrors `location.file` for convenient grouping in reports.
    pub file: SrcPath,
}

/// A recoverable, file-scoped extraction failure. Only the source extractor
/// produces these; the plan extractor fails its whole call instead.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{file}: {message}")]
pub struct SourceError {
    pub file: SrcPath,
    pub message: String,
}

/// Output of one extraction call. Resource order is discovery order and is
/// significant: the engine's violation order, and downstream report
/// tie-breaking, both derive from it.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub resources: Vec<Resource>,
    pub errors: Vec<SourceError>,
}
