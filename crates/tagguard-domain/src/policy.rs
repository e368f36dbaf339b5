use regex::Regex;

/// Effective, validated configuration consumed by the engine.
///
/// Built once by `tagguard-settings` and treated as immutable afterward. All
/// `Vec`s preserve configured order; that order is observable in violation
/// output.
#[derive(Clone, Debug, Default)]
pub struct Policy {
    pub global: Global,
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug, Default)]
pub struct Global {
    /// Tag names every non-ignored resource must carry, in configured order.
    pub always_required_tags: Vec<String>,
    /// Resource types fully exempted from every check.
    pub ignore_resource_types: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub required_tags: Vec<String>,
    pub forbidden_tags: Vec<String>,
    /// Single tag equality gate; `None` means the rule is unconditional.
    pub condition: Option<Condition>,
    /// Allow-list of resource types; empty means the rule applies to all.
    pub resource_types: Vec<String>,
    pub tag_constraints: Vec<TagConstraint>,
    pub tag_patterns: Vec<TagPattern>,
}

#[derive(Clone, Debug)]
pub struct Condition {
    pub tag: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct TagConstraint {
    pub tag: String,
    pub allowed_values: Vec<String>,
}

/// A pre-compiled tag-name matcher. The engine only applies it; compilation
/// (and rejection of bad syntax) happens at config load.
#[derive(Clone, Debug)]
pub struct TagPattern {
    pub regex: Regex,
    pub message: String,
}
