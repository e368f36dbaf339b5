use crate::policy::Rule;
use tagguard_types::{Resource, Violation};

mod forbidden_tags;
mod required_tags;
mod tag_constraints;
mod tag_patterns;


/// Evaluate one rule against one resource, appending violations to `out`.
///
/// The internal check order (required, forbidden, constraints, patterns) is
/// an observable contract.
pub fn run_rule(resource: &Resource, rule: &Rule, out: &mut Vec<Violation>) {
    if !applies(resource, rule) {
        return;
    }

    required_tags::run(resource, rule, out);
    forbidden_tags::run(resource, rule, out);
    tag_constraints::run(resource, rule, out);
    tag_patterns::run(resource, rule, out);
}

/// Both gates must hold: the type allow-list (empty = all types) and the
/// optional tag-equality condition (missing tag = false, exact match only).
fn applies(resource: &Resource, rule: &Rule) -> bool {
    if !rule.resource_types.is_empty()
        && !rule.resource_types.iter().any(|t| t == &resource.resource_type)
    {
        return false;
    }

    match &rule.condition {
        None => true,
        Some(cond) => resource.tags.get(&cond.tag).map(String::as_str) == Some(cond.value.as_str()),
    }
}

fn violation(resource: &Resource, rule: &Rule, message: String) -> Violation {
    Violation {
        rule: rule.name.clone(),
        description: rule.description.clone(),
        resource: resource.clone(),
        message,
    }
}
