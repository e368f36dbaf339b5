//! The `validate` use case: extract resources, evaluate the policy, render.

use anyhow::Context;
use camino::Utf8PathBuf;
use tagguard_types::SourceError;

/// Where resources come from: `.tf` sources under root paths, or one plan
/// JSON snapshot.
#[derive(Clone, Debug)]
pub enum SourceInput {
    Files { roots: Vec<Utf8PathBuf> },
    Plan { file: Utf8PathBuf },
}

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Rule file contents (`tag-rules.yaml`).
    pub config_text: &'a str,
    pub source: SourceInput,
    /// Append the per-rule summary after the report.
    pub show_summary: bool,
}

/// Output from the validate use case. The failure signal (`violation_count`)
/// is computed alongside the rendered report and never suppresses it.
#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: String,
    pub summary: Option<String>,
    /// Recoverable per-file extraction failures (source mode only); the
    /// caller decides whether to treat them as fatal. Default: warn and
    /// continue.
    pub parse_errors: Vec<SourceError>,
    pub violation_count: usize,
}

/// Run the validate use case: compile the policy, extract resources from the
/// selected input shape, evaluate, and render the report.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let policy = tagguard_settings::load_policy(input.config_text).context("load config")?;

    let parse_result = match &input.source {
        SourceInput::Files { roots } => {
            tagguard_extract::extract_sources(roots).context("parse terraform files")?
        }
        SourceInput::Plan { file } => {
            tagguard_extract::extract_plan(file).context("parse terraform plan")?
        }
    };

    let violations = tagguard_domain::validate(&parse_result.resources, &policy);

    let report = tagguard_render::render_report(&violations);
    let summary = input
        .show_summary
        .then(|| tagguard_render::render_summary(&violations));

    Ok(ValidateOutput {
        report,
        summary,
        parse_errors: parse_result.errors,
        violation_count: violations.len(),
    })
}

/// Map the violation count to the process exit code: 0 = clean, 2 =
/// violations found. Runtime errors use 1, handled by the CLI.
pub fn violation_exit_code(violation_count: usize) -> i32 {
    if violation_count > 0 { 2 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    const CONFIG: &str = r#"
global:
  always_required_tags: [Owner]
rules:
  - name: no-temp
    forbidden_tags: [Temp]
"#;

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn source_mode_end_to_end() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(
            &root.join("main.tf"),
            r#"resource "aws_instance" "web" {
  tags = {
    Temp = "true"
  }
}
"#,
        );

        let output = run_validate(ValidateInput {
            config_text: CONFIG,
            source: SourceInput::Files { roots: vec![root] },
            show_summary: true,
        })
        .expect("run validate");

        assert_eq!(output.violation_count, 2);
        assert!(output.report.contains("Missing required tag: Owner"));
        assert!(output.report.contains("Forbidden tag found: Temp"));
        assert!(output.parse_errors.is_empty());
        let summary = output.summary.expect("summary requested");
        assert!(summary.contains("Total violations: 2"));
        assert_eq!(violation_exit_code(output.violation_count), 2);
    }

    #[test]
    fn plan_mode_end_to_end() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        let plan = root.join("plan.json");
        write_file(
            &plan,
            r#"{"planned_values":{"root_module":{"resources":[
              {"address":"aws_instance.web","values":{"tags":{"Owner":"ops"}}}
            ]}}}"#,
        );

        let output = run_validate(ValidateInput {
            config_text: CONFIG,
            source: SourceInput::Plan { file: plan },
            show_summary: false,
        })
        .expect("run validate");

        assert_eq!(output.violation_count, 0);
        assert_eq!(output.report, "✅ No tag violations found!\n");
        assert!(output.summary.is_none());
        assert_eq!(violation_exit_code(0), 0);
    }

    #[test]
    fn malformed_plan_is_a_runtime_error() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        let plan = root.join("plan.json");
        write_file(&plan, "{broken");

        let err = run_validate(ValidateInput {
            config_text: CONFIG,
            source: SourceInput::Plan { file: plan },
            show_summary: false,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parse terraform plan"));
    }

    #[test]
    fn bad_config_is_a_runtime_error() {
        let err = run_validate(ValidateInput {
            config_text: "rules:\n  - tag_patterns:\n      - pattern: '['\n",
            source: SourceInput::Files { roots: vec![] },
            show_summary: false,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("load config"));
    }

    #[test]
    fn source_parse_errors_are_surfaced_not_fatal() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("bad.tf"), "resource \"x\" {{{");
        write_file(
            &root.join("good.tf"),
            "resource \"aws_instance\" \"web\" {}\n",
        );

        let output = run_validate(ValidateInput {
            config_text: CONFIG,
            source: SourceInput::Files { roots: vec![root] },
            show_summary: false,
        })
        .expect("run validate");

        assert_eq!(output.parse_errors.len(), 1);
        // Typed per-file errors: callers can inspect the file, not just text.
        assert!(output.parse_errors[0].file.as_str().ends_with("bad.tf"));
        assert!(output.parse_errors[0].to_string().contains("bad.tf"));
        // The good file still validates (missing Owner).
        assert_eq!(output.violation_count, 1);
    }
}
