use crate::location;
use pubgate_types::{AuditReport, Verdict, explain::remediation_hint};
use std::collections::BTreeSet;

/// Terminal output: one confirmation line on PASS, a `(path, reason)` table on FAIL.
pub fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();

    if report.sources.all_unavailable() {
        out.push_str("pubgate: FAIL could not list repository files\n");
        for reason in report.sources.unavailable_reasons() {
            out.push_str(&format!("  - {reason}\n"));
        }
        return out;
    }

    if report.verdict == Verdict::Pass {
        match &report.note {
            Some(note) => out.push_str(&format!("pubgate: PASS ({note})\n")),
            None => out.push_str(&format!(
                "pubgate: PASS ({} files checked, {} mode, preset {})\n",
                report.paths_scanned, report.mode, report.preset
            )),
        }
        return out;
    }

    out.push_str(&format!(
        "pubgate: FAIL ({} of {} files blocked, {} violations, {} mode, preset {})\n\n",
        report.paths_blocked,
        report.paths_scanned,
        report.violations.len(),
        report.mode,
        report.preset
    ));

    let rows: Vec<(String, &str)> = report
        .violations
        .iter()
        .map(|v| (location(v), v.reason.as_str()))
        .collect();
    let width = rows
        .iter()
        .map(|(path, _)| path.chars().count())
        .max()
        .unwrap_or(0)
        .max("PATH".len());

    out.push_str(&format!("{:<width$}  REASON\n", "PATH"));
    for (path, reason) in &rows {
        out.push_str(&format!("{path:<width$}  {reason}\n"));
    }

    let codes: BTreeSet<&str> = report.violations.iter().map(|v| v.code.as_str()).collect();
    let hints: Vec<(&str, &str)> = codes
        .into_iter()
        .filter_map(|code| remediation_hint(code).map(|h| (code, h)))
        .collect();
    if !hints.is_empty() {
        out.push_str("\nremediation:\n");
        for (code, hint) in hints {
            out.push_str(&format!("  {code}: {hint}\n"));
        }
    }

    out
}
