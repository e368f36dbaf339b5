use crate::checks::violation;
use crate::policy::Rule;
use tagguard_types::{Resource, Violation};

/// Presence check only: an empty-string value still satisfies the
/// requirement.
pub fn run(resource: &Resource, rule: &Rule, out: &mut Vec<Violation>) {
    for required in &rule.required_tags {
        if !resource.tags.contains_key(required) {
            out.push(violation(
                resource,
                rule,
                format!("Missing required tag: {required}"),
            ));
        }
    }
}
