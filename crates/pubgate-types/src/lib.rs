//! Stable DTOs and IDs used across the pubgate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted audit report
//! - stable string IDs and codes
//! - canonical repo-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod report;

pub use explain::{ExamplePair, Explanation, lookup_explanation, remediation_hint};
pub use path::RepoPath;
pub use report::{
    AuditReport, GateMode, SCHEMA_AUDIT_REPORT_V1, SourceStatus, SourceSummary, ToolMeta,
    Verdict, Violation, ViolationCategory,
};
