use std::collections::BTreeMap;
use std::fmt::Write as _;
use tagguard_types::Violation;

/// Render the full violation report.
///
/// Violations are grouped by file (lexicographic) and sorted by start line
/// within each file; the sort is stable so ties keep the engine's emission
/// order.
pub fn render_report(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "✅ No tag violations found!\n".to_string();
    }

    let mut by_file: BTreeMap<&str, Vec<&Violation>> = BTreeMap::new();
    for violation in violations {
        by_file
            .entry(violation.resource.file.as_str())
            .or_default()
            .push(violation);
    }

    let mut out = String::new();
    let _ = writeln!(out, "❌ Found {} tag violation(s):", violations.len());
    out.push('\n');

    for (file, mut file_violations) in by_file {
        let _ = writeln!(out, "📄 {file}");
        file_violations.sort_by_key(|v| v.resource.location.start.line);
        for violation in file_violations {
            render_violation(&mut out, violation);
        }
        out.push('\n');
    }

    out
}

fn render_violation(out: &mut String, violation: &Violation) {
    let resource = &violation.resource;
    let _ = writeln!(
        out,
        "  Line {}: {}.{}",
        resource.location.start.line, resource.resource_type, resource.name
    );
    let _ = writeln!(out, "    Rule: {}", violation.rule);
    let _ = writeln!(out, "    Message: {}", violation.message);
    if !violation.description.is_empty() {
        let _ = writeln!(out, "    Description: {}", violation.description);
    }
}
