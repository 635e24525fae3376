use pubgate_types::{AuditReport, ViolationCategory};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path}[,line={line}]::{message}`
///
/// At most `max` error annotations are emitted; a trailing warning counts the rest.
pub fn render_github_annotations(report: &AuditReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    for reason in report.sources.unavailable_reasons() {
        out.push(format!("::warning::[pubgate] could not list files: {}", escape(reason)));
    }

    for v in report.violations.iter().take(max) {
        let mut meta = format!("file={}", escape_property(v.path.as_str()));
        if v.category == ViolationCategory::ContentReference
            && let Some(line) = v.line
        {
            meta.push_str(&format!(",line={}", line));
        }

        let message = escape(&format!("[{}:{}] {}", v.check_id, v.code, v.reason));
        out.push(format!("::error {}::{}", meta, message));
    }

    let omitted = report.violations.len().saturating_sub(max);
    if omitted > 0 {
        out.push(format!(
            "::warning::[pubgate] {omitted} more violations not annotated; see the full report"
        ));
    }

    out
}

fn escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape(s).replace(':', "%3A").replace(',', "%2C")
}
