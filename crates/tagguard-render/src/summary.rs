use std::collections::BTreeMap;
use std::fmt::Write as _;
use tagguard_types::Violation;

/// Render the optional per-rule summary. Empty input renders nothing.
pub fn render_summary(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return String::new();
    }

    let mut by_rule: BTreeMap<&str, usize> = BTreeMap::new();
    for violation in violations {
        *by_rule.entry(violation.rule.as_str()).or_default() += 1;
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "Total violations: {}", violations.len());
    out.push('\n');
    let _ = writeln!(out, "Violations by rule:");
    for (rule, count) in by_rule {
        let _ = writeln!(out, "  {rule}: {count}");
    }

    out
}
