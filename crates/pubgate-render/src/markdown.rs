use crate::location;
use pubgate_types::AuditReport;

pub fn render_markdown(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str("# Pubgate report\n\n");
    let verdict = if report.sources.all_unavailable() {
        "FAIL (sources unavailable)"
    } else {
        report.verdict.label()
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Mode: `{}` (preset `{}`)\n- Files: {} scanned / {} blocked\n\n",
        verdict, report.mode, report.preset, report.paths_scanned, report.paths_blocked
    ));

    for reason in report.sources.unavailable_reasons() {
        out.push_str(&format!("> Warning: could not list files: {}\n\n", reason));
    }

    if let Some(note) = &report.note {
        out.push_str(&format!("> Note: {}\n\n", note));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");
    out.push_str("| Path | Reason | Code |\n");
    out.push_str("|------|--------|------|\n");
    for v in &report.violations {
        out.push_str(&format!(
            "| {} | {} | `{}` |\n",
            code_cell(&location(v)),
            escape_cell(&v.reason),
            v.code
        ));
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut help_lines = String::new();
    for v in &report.violations {
        if let Some(help) = &v.help
            && !seen.contains(&v.code.as_str())
        {
            seen.push(v.code.as_str());
            help_lines.push_str(&format!("- `{}`: {}\n", v.code, help));
        }
    }
    if !help_lines.is_empty() {
        out.push_str("\n## Remediation\n\n");
        out.push_str(&help_lines);
    }

    out
}

/// Table cells end at an unescaped `|`.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Inline code span; a path containing backticks needs a wider fence.
fn code_cell(s: &str) -> String {
    let s = escape_cell(s);
    if s.contains('`') {
        format!("`` {s} ``")
    } else {
        format!("`{s}`")
    }
}
