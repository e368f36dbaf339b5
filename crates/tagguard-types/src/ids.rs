//! Stable identifiers used in violations and reports.

/// Synthetic rule name for the always-required tag check driven by
/// `global.always_required_tags`.
pub const RULE_GLOBAL_REQUIRED_TAGS: &str = "global-required-tags";

/// Description paired with [`RULE_GLOBAL_REQUIRED_TAGS`].
pub const DESC_GLOBAL_REQUIRED_TAGS: &str = "Global required tags";
