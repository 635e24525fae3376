use crate::RepoPath;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for pubgate audit reports.
pub const SCHEMA_AUDIT_REPORT_V1: &str = "pubgate.audit.v1";

/// Classification strategy for a gate deployment.
///
/// `Allowlist` blocks everything not explicitly permitted. `Denylist` allows
/// everything not explicitly forbidden. `Combined` reports the union of both
/// and is only ever selected by explicit configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateMode {
    #[default]
    Allowlist,
    Denylist,
    Combined,
}

impl GateMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GateMode::Allowlist => "allowlist",
            GateMode::Denylist => "denylist",
            GateMode::Combined => "combined",
        }
    }

    pub fn checks_allowlist(self) -> bool {
        matches!(self, GateMode::Allowlist | GateMode::Combined)
    }

    pub fn checks_denylist(self) -> bool {
        matches!(self, GateMode::Denylist | GateMode::Combined)
    }
}

impl std::fmt::Display for GateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

/// Violation categories, declared in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// Allowlist miss.
    PathNotAllowed,
    /// Deny rule hit.
    PathForbidden,
    /// A tracked text file mentions a private path fragment.
    ContentReference,
}

impl ViolationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCategory::PathNotAllowed => "path_not_allowed",
            ViolationCategory::PathForbidden => "path_forbidden",
            ViolationCategory::ContentReference => "content_reference",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: RepoPath,
    pub category: ViolationCategory,
    pub check_id: String,
    pub code: String,
    pub reason: String,

    /// 1-based line of the first offending occurrence (content violations only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup: a hash of
    /// `check_id + code + path + reason`.
    pub fingerprint: String,
}

/// Outcome of one path-source query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SourceStatus {
    Available { paths: u32 },
    Unavailable { reason: String },
}

impl SourceStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, SourceStatus::Available { .. })
    }
}

impl Default for SourceStatus {
    fn default() -> Self {
        SourceStatus::Available { paths: 0 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub tracked: SourceStatus,
    pub staged: SourceStatus,
}

impl SourceSummary {
    /// True when no query produced a file list at all.
    pub fn all_unavailable(&self) -> bool {
        !self.tracked.is_available() && !self.staged.is_available()
    }

    pub fn unavailable_reasons(&self) -> Vec<&str> {
        [&self.tracked, &self.staged]
            .into_iter()
            .filter_map(|s| match s {
                SourceStatus::Unavailable { reason } => Some(reason.as_str()),
                SourceStatus::Available { .. } => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub mode: GateMode,
    pub preset: String,
    pub verdict: Verdict,
    pub paths_scanned: u32,
    pub paths_blocked: u32,
    pub violations: Vec<Violation>,
    pub sources: SourceSummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AuditReport {
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    pub fn violations_in(&self, category: ViolationCategory) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.category == category)
    }
}
