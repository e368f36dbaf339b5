use serde::{Deserialize, Serialize};

/// `tag-rules.yaml` schema.
///
/// This is a *user-facing* config model: every field defaults so sparse rule
/// files stay valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    #[serde(default)]
    pub global: GlobalConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub always_required_tags: Vec<String>,

    #[serde(default)]
    pub ignore_resource_types: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub required_tags: Vec<String>,

    #[serde(default)]
    pub forbidden_tags: Vec<String>,

    /// Single tag-equality gate; absent means unconditional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionConfig>,

    /// Resource-type allow-list; empty applies to all types.
    #[serde(default)]
    pub resource_types: Vec<String>,

    #[serde(default)]
    pub tag_constraints: Vec<TagConstraintConfig>,

    #[serde(default)]
    pub tag_patterns: Vec<TagPatternConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionConfig {
    pub tag: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagConstraintConfig {
    pub tag: String,
    #[serde(default)]
    pub allowed_values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagPatternConfig {
    pub pattern: String,
    #[serde(default)]
    pub message: String,
}
