use crate::Resource;
use serde::{Deserialize, Serialize};

/// One reported failure of a resource against a rule or global constraint.
///
/// `rule` is the configured rule name, or [`crate::ids::RULE_GLOBAL_REQUIRED_TAGS`]
/// for the global check. `message` is the final rendered string and is part of
/// the external contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub description: String,
    pub resource: Resource,
    pub message: String,
}
