//! Pure publish-gate evaluation (no IO).
//!
//! Input: candidate paths and file contents gathered elsewhere, plus a compiled rule set.
//! Output: violations + verdict + summary counts.

#![forbid(unsafe_code)]

pub mod content;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{AuditInput, audit};
pub use fingerprint::fingerprint_for_violation;
pub use rules::{AllowRules, Classification, DenyRules, RuleError, RuleSet};
