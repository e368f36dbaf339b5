//! Rule-file parsing and pattern compilation.
//!
//! This crate is intentionally IO-free: it parses and compiles configuration
//! provided as strings. Every tag-name pattern is compiled here, so the
//! engine never sees (or rejects) pattern syntax.

#![forbid(unsafe_code)]

mod compile;
mod model;

pub use model::{
    ConditionConfig, GlobalConfig, RuleConfig, RulesFile, TagConstraintConfig, TagPatternConfig,
};

use tagguard_domain::Policy;

/// Parse a YAML rule file (typically `tag-rules.yaml`) into the permissive
/// user-facing model.
pub fn parse_rules_yaml(input: &str) -> anyhow::Result<RulesFile> {
    let file: RulesFile = serde_yaml::from_str(input)?;
    Ok(file)
}

/// Parse and compile in one step: the usual entry point for callers holding
/// the raw file contents.
pub fn load_policy(input: &str) -> anyhow::Result<Policy> {
    let file = parse_rules_yaml(input)?;
    compile::compile(file)
}
