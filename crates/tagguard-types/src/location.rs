use crate::SrcPath;
use serde::{Deserialize, Serialize};

/// A 1-based line/column position inside a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The start of a file. Used when the input format carries no positions
    /// (plan snapshots).
    pub fn file_start() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Source range of a resource declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: SrcPath,
    pub start: Span,
    pub end: Span,
}

impl Location {
    /// A location covering the start of `file`, for inputs without positions.
    pub fn file_only(file: SrcPath) -> Self {
        Self {
            file,
            start: Span::file_start(),
            end: Span::file_start(),
        }
    }
}
