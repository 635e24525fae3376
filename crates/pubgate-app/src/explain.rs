//! The `explain` use case: look up check/code documentation.

use pubgate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    for (label, body) in [
        ("Before (blocked):", exp.examples.before),
        ("After (publishable):", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str("\n```\n");
        out.push_str(body);
        out.push_str("\n```\n");
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check id or code: {identifier}\n\n");
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubgate_types::ids;

    #[test]
    fn explain_known_check_id() {
        let output = run_explain(ids::CHECK_PUBLISH_ALLOWLIST);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_code() {
        let output = run_explain(ids::CODE_PRIVATE_PATH_REFERENCE);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown_lists_alternatives() {
        let ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } = run_explain("not_a_real_thing")
        else {
            panic!("expected NotFound");
        };
        assert_eq!(identifier, "not_a_real_thing");
        assert!(available_check_ids.contains(&ids::CHECK_PUBLISH_DENYLIST));
        assert!(available_codes.contains(&ids::CODE_FORBIDDEN_PATH));
    }

    #[test]
    fn format_explanation_has_sections() {
        let ExplainOutput::Found(exp) = run_explain(ids::CHECK_PUBLISH_DENYLIST) else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Remediation\n-----------"));
        assert!(formatted.contains("Before (blocked):\n```\n"));
        assert!(formatted.contains("After (publishable):\n```\n"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["check.one", "check.two"], &["code.one"]);
        assert!(formatted.contains("Unknown check id or code: missing"));
        assert!(formatted.contains("  - check.two\n"));
        assert!(formatted.contains("Available codes:\n  - code.one\n"));
    }
}
