//! Output formats for an audit report, plus artifact writing.

use anyhow::Context;
use camino::Utf8Path;
use pubgate_types::AuditReport;

/// Annotation cap for the `github` format.
pub const MAX_ANNOTATIONS: usize = 50;

/// How `check` prints its report on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary and table.
    #[default]
    Text,
    Markdown,
    Json,
    /// GitHub Actions workflow commands.
    Github,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "github" | "gha" => Some(Self::Github),
            _ => None,
        }
    }
}

/// Render `report` in the requested format. Output always ends with a newline
/// unless it is empty.
pub fn render_report(report: &AuditReport, format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => pubgate_render::render_text(report),
        OutputFormat::Markdown => pubgate_render::render_markdown(report),
        OutputFormat::Json => serialize_report(report)?,
        OutputFormat::Github => {
            let lines = pubgate_render::render_github_annotations(report, MAX_ANNOTATIONS);
            let mut out = lines.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            out
        }
    };
    Ok(out)
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &AuditReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn write_report(path: &Utf8Path, report: &AuditReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_text(path, &data)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
