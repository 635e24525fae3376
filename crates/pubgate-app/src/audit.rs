//! The `check` use case: list candidate paths, classify them, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use pubgate_domain::AuditInput;
use pubgate_repo::{PathSource, collect_candidates, load_contents};
use pubgate_settings::{Overrides, PubgateConfigV1, ResolvedConfig};
use pubgate_types::{AuditReport, SCHEMA_AUDIT_REPORT_V1, ToolMeta, Verdict};
use tracing::{debug, info, warn};

/// Note recorded when no path source could be queried.
pub const NOTE_SOURCES_UNAVAILABLE: &str = "could not list repository files";

/// Input for the audit use case.
pub struct AuditRequest<'a> {
    /// Repository root path (content files are read relative to it).
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Where candidate paths come from.
    pub source: &'a dyn PathSource,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AuditReport,
    /// The resolved configuration used.
    pub resolved: ResolvedConfig,
}

/// Parse config text (empty means preset defaults) and resolve it against overrides.
pub fn resolve_rules(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        PubgateConfigV1::default()
    } else {
        pubgate_settings::parse_config_toml(config_text).context("parse config")?
    };
    pubgate_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the audit: parse config, collect candidates, classify, produce report.
///
/// Configuration errors are returned. Source failures are not: they degrade to an
/// empty candidate set and surface in [`AuditReport::sources`].
pub fn run_audit(req: AuditRequest<'_>) -> anyhow::Result<AuditOutput> {
    let resolved = resolve_rules(req.config_text, req.overrides)?;
    debug!(
        preset = %resolved.effective.preset,
        mode = %resolved.effective.mode,
        allow_rules = resolved.effective.allow.len(),
        deny_rules = resolved.effective.deny.len(),
        "resolved rule set"
    );

    let candidates = collect_candidates(req.source);
    let contents = load_contents(
        req.source,
        req.repo_root,
        &resolved.effective.content.files,
        &candidates.paths,
    );

    let input = AuditInput {
        paths: candidates.paths,
        contents,
    };
    let domain = pubgate_domain::audit(&input, &resolved.rules);

    let mut report = AuditReport {
        schema: SCHEMA_AUDIT_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pubgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        mode: resolved.effective.mode,
        preset: resolved.effective.preset.clone(),
        verdict: domain.verdict,
        paths_scanned: domain.paths_scanned,
        paths_blocked: domain.paths_blocked,
        violations: domain.violations,
        sources: candidates.sources,
        note: domain.note,
    };

    // No file list at all is never a pass.
    if report.sources.all_unavailable() {
        warn!("no path source could be queried; refusing to pass");
        report.verdict = Verdict::Fail;
        report.note = Some(NOTE_SOURCES_UNAVAILABLE.to_string());
    }

    info!(
        verdict = report.verdict.label(),
        scanned = report.paths_scanned,
        violations = report.violations.len(),
        "publish audit finished"
    );

    Ok(AuditOutput { report, resolved })
}

/// Map a report to a process exit status: 0 = PASS, 1 = FAIL or sources unavailable.
pub fn exit_code(report: &AuditReport) -> i32 {
    if report.sources.all_unavailable() {
        return 1;
    }
    match report.verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
