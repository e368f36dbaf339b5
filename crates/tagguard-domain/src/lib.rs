//! Pure tag policy evaluation engine.
//!
//! This crate performs no I/O and cannot fail at runtime: `validate` is total
//! over its inputs. Pattern syntax is rejected earlier, at configuration load
//! (`tagguard-settings`), never here.

#![forbid(unsafe_code)]

mod checks;
mod engine;
pub mod policy;

pub use engine::validate;
pub use policy::{Condition, Global, Policy, Rule, TagConstraint, TagPattern};
