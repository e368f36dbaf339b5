//! Input adapters: discover and parse `.tf` sources, or decode a plan JSON
//! snapshot, into the canonical resource model.
//!
//! This crate is allowed to do filesystem IO. The two extraction paths have
//! deliberately different failure shapes: source extraction isolates failures
//! per file (one [`SourceError`] each, siblings unaffected), while the plan
//! snapshot is one atomic unit and any read/decode failure fails the whole
//! call with no partial resources.

#![forbid(unsafe_code)]

mod discover;
mod plan;
mod source;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use tagguard_types::{ParseResult, SourceError, SrcPath};

pub use discover::discover_tf_files;
pub use plan::extract_plan_json;
pub use source::extract_source;

/// Walk `roots` for `.tf` files and extract resources from each, in
/// discovery order then per-file block-appearance order.
pub fn extract_sources(roots: &[Utf8PathBuf]) -> anyhow::Result<ParseResult> {
    let files = discover::discover_tf_files(roots)?;

    let mut result = ParseResult::default();
    for path in files {
        let file = SrcPath::from(path.as_path());
        match std::fs::read_to_string(&path) {
            Ok(text) => match source::extract_source(&file, &text) {
                Ok(resources) => result.resources.extend(resources),
                Err(err) => result.errors.push(SourceError {
                    file,
                    message: format!("{err:#}"),
                }),
            },
            Err(err) => result.errors.push(SourceError {
                file,
                message: format!("failed to read file: {err}"),
            }),
        }
    }

    Ok(result)
}

/// Read and decode one plan snapshot. Unlike [`extract_sources`], any failure
/// here is fatal for the whole call.
pub fn extract_plan(path: &Utf8Path) -> anyhow::Result<ParseResult> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read plan file: {path}"))?;
    plan::extract_plan_json(&SrcPath::from(path), &text)
}
