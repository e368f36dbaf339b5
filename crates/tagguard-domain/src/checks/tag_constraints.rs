use crate::checks::violation;
use crate::policy::Rule;
use tagguard_types::{Resource, Violation};

/// Allowed-value check. Absent tags are not checked here: this is not a
/// required-tag substitute, absence alone never triggers a constraint
/// violation. An empty allow-list means any present value violates.
pub fn run(resource: &Resource, rule: &Rule, out: &mut Vec<Violation>) {
    for constraint in &rule.tag_constraints {
        let Some(value) = resource.tags.get(&constraint.tag) else {
            continue;
        };
        if !constraint.allowed_values.iter().any(|allowed| allowed == value) {
            out.push(violation(
                resource,
                rule,
                format!(
                    "Invalid value for tag {}: '{}'. Allowed values: {}",
                    constraint.tag,
                    value,
                    constraint.allowed_values.join(", "),
                ),
            ));
        }
    }
}
