use crate::checks;
use crate::policy::{Global, Policy};
use tagguard_types::{Resource, Violation, ids};

/// Evaluate `resources` against `policy`, producing the ordered violation
/// list.
///
/// Ordering is a contract, not incidental: resources are visited in their
/// emission order, and within one resource the global required-tags check
/// runs first, then each rule in configured order with its fixed internal
/// check order. Downstream file/line sorting uses this order as a tie-break.
pub fn validate(resources: &[Resource], policy: &Policy) -> Vec<Violation> {
    let mut out: Vec<Violation> = Vec::new();

    for resource in resources {
        if is_ignored(resource, &policy.global) {
            continue;
        }

        check_global_required_tags(resource, &policy.global, &mut out);

        for rule in &policy.rules {
            checks::run_rule(resource, rule, &mut out);
        }
    }

    out
}

fn is_ignored(resource: &Resource, global: &Global) -> bool {
    global
        .ignore_resource_types
        .iter()
        .any(|t| t == &resource.resource_type)
}

fn check_global_required_tags(resource: &Resource, global: &Global, out: &mut Vec<Violation>) {
    for required in &global.always_required_tags {
        if !resource.tags.contains_key(required) {
            out.push(Violation {
                rule: ids::RULE_GLOBAL_REQUIRED_TAGS.to_string(),
                description: ids::DESC_GLOBAL_REQUIRED_TAGS.to_string(),
                resource: resource.clone(),
                message: format!("Missing required tag: {required}"),
            });
        }
    }
}
