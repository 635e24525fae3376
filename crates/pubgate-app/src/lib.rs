//! Use case orchestration for pubgate.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod hook;
mod render;
mod rules;

pub use audit::{
    AuditOutput, AuditRequest, NOTE_SOURCES_UNAVAILABLE, exit_code, resolve_rules, run_audit,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use hook::{HOOK_MARKER, HookOutcome, hook_script, install_hook};
pub use render::{OutputFormat, render_report, serialize_report, write_report, write_text};
pub use rules::describe_rules;
