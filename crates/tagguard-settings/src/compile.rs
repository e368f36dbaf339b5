use crate::model::{RuleConfig, RulesFile};
use anyhow::Context;
use regex::Regex;
use tagguard_domain::{Condition, Global, Policy, Rule, TagConstraint, TagPattern};

/// Compile the user-facing model into the effective policy, rejecting bad
/// pattern syntax here so the engine stays total.
pub fn compile(file: RulesFile) -> anyhow::Result<Policy> {
    let rules = file
        .rules
        .into_iter()
        .map(compile_rule)
        .collect::<anyhow::Result<Vec<Rule>>>()?;

    Ok(Policy {
        global: Global {
            always_required_tags: file.global.always_required_tags,
            ignore_resource_types: file.global.ignore_resource_types,
        },
        rules,
    })
}

fn compile_rule(cfg: RuleConfig) -> anyhow::Result<Rule> {
    let tag_patterns = cfg
        .tag_patterns
        .into_iter()
        .map(|p| {
            let regex = Regex::new(&p.pattern)
                .with_context(|| format!("invalid regex pattern in rule {}", cfg.name))?;
            Ok(TagPattern {
                regex,
                message: p.message,
            })
        })
        .collect::<anyhow::Result<Vec<TagPattern>>>()?;

    Ok(Rule {
        name: cfg.name,
        description: cfg.description,
        required_tags: cfg.required_tags,
        forbidden_tags: cfg.forbidden_tags,
        condition: cfg.condition.map(|c| Condition {
            tag: c.tag,
            value: c.value,
        }),
        resource_types: cfg.resource_types,
        tag_constraints: cfg
            .tag_constraints
            .into_iter()
            .map(|c| TagConstraint {
                tag: c.tag,
                allowed_values: c.allowed_values,
            })
            .collect(),
        tag_patterns,
    })
}
