//! Use case orchestration for tagguard.
//!
//! This crate provides the application layer: the validate use case that
//! coordinates settings, extraction, the engine, and rendering. It is
//! intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod validate;

pub use validate::{SourceInput, ValidateInput, ValidateOutput, run_validate, violation_exit_code};
