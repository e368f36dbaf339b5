use crate::checks::violation;
use crate::policy::Rule;
use tagguard_types::{Resource, Violation};

pub fn run(resource: &Resource, rule: &Rule, out: &mut Vec<Violation>) {
    for forbidden in &rule.forbidden_tags {
        if resource.tags.contains_key(forbidden) {
            out.push(violation(
                resource,
                rule,
                format!("Forbidden tag found: {forbidden}"),
            ));
        }
    }
}
