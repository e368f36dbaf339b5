use crate::checks::violation;
use crate::policy::Rule;
use tagguard_types::{Resource, Violation};

/// Every present tag key is matched against every pattern on the rule, not
/// only names the rule mentions elsewhere. The N×M multiplicity is the
/// contract. Tag keys come out of the `BTreeMap` in lexicographic order,
/// which keeps the product deterministic.
pub fn run(resource: &Resource, rule: &Rule, out: &mut Vec<Violation>) {
    for tag_name in resource.tags.keys() {
        for pattern in &rule.tag_patterns {
            if !pattern.regex.is_match(tag_name) {
                out.push(violation(
                    resource,
                    rule,
                    format!(
                        "Tag name '{}' does not match pattern: {}",
                        tag_name, pattern.message
                    ),
                ));
            }
        }
    }
}
