use pubgate_types::{Verdict, Violation};

/// Result of one pure audit pass. The app layer wraps this in the report envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub paths_scanned: u32,
    pub paths_blocked: u32,
    pub note: Option<String>,
}
