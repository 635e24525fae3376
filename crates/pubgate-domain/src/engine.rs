use crate::content;
use crate::fingerprint::fingerprint_for_violation;
use crate::report::DomainReport;
use crate::rules::RuleSet;
use pubgate_types::{
    RepoPath, Verdict, Violation, ViolationCategory, explain::remediation_hint, ids,
};
use std::collections::{BTreeMap, BTreeSet};

/// Everything the audit needs, gathered by the caller.
#[derive(Clone, Debug, Default)]
pub struct AuditInput {
    /// Candidate paths. Duplicates are collapsed; order does not matter.
    pub paths: Vec<RepoPath>,
    /// Text of content-checked files that are present in `paths`.
    pub contents: BTreeMap<RepoPath, String>,
}

pub fn audit(input: &AuditInput, rules: &RuleSet) -> DomainReport {
    let candidates: BTreeSet<&RepoPath> = input.paths.iter().collect();
    let mode = rules.mode;

    let mut violations: Vec<Violation> = Vec::new();
    let mut paths_blocked: u32 = 0;

    for path in &candidates {
        let classification = rules.classify(path);
        if classification.is_blocked(mode) {
            paths_blocked += 1;
        }

        if mode.checks_allowlist() && !classification.allowed {
            violations.push(violation(
                path,
                ViolationCategory::PathNotAllowed,
                ids::CHECK_PUBLISH_ALLOWLIST,
                ids::CODE_NOT_IN_ALLOWLIST,
                ids::REASON_NOT_IN_ALLOWLIST.to_string(),
                None,
            ));
        }

        if mode.checks_denylist() {
            for reason in classification.deny_reasons {
                violations.push(violation(
                    path,
                    ViolationCategory::PathForbidden,
                    ids::CHECK_PUBLISH_DENYLIST,
                    ids::CODE_FORBIDDEN_PATH,
                    reason,
                    None,
                ));
            }
        }
    }

    if !rules.content.is_empty() {
        let files: BTreeSet<&RepoPath> = rules.content.files.iter().collect();
        for file in files {
            // Only tracked (or staged) files can leak.
            if !candidates.contains(file) {
                continue;
            }
            let Some(text) = input.contents.get(file) else {
                continue;
            };
            for hit in content::scan(text, &rules.content.fragments) {
                violations.push(violation(
                    file,
                    ViolationCategory::ContentReference,
                    ids::CHECK_PUBLISH_CONTENT,
                    ids::CODE_PRIVATE_PATH_REFERENCE,
                    format!("content references private path {}", hit.fragment),
                    Some(hit.line),
                ));
            }
        }
    }

    // Stable sort: rule order survives within one path and category.
    violations.sort_by(|a, b| a.path.cmp(&b.path).then(a.category.cmp(&b.category)));

    let verdict = if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let note = candidates
        .is_empty()
        .then(|| ids::NOTE_NOTHING_TO_VALIDATE.to_string());

    DomainReport {
        verdict,
        violations,
        paths_scanned: u32::try_from(candidates.len()).unwrap_or(u32::MAX),
        paths_blocked,
        note,
    }
}

fn violation(
    path: &RepoPath,
    category: ViolationCategory,
    check_id: &str,
    code: &str,
    reason: String,
    line: Option<u32>,
) -> Violation {
    let fingerprint = fingerprint_for_violation(check_id, code, path.as_str(), &reason);
    Violation {
        path: path.clone(),
        category,
        check_id: check_id.to_string(),
        code: code.to_string(),
        reason,
        line,
        help: remediation_hint(code).map(str::to_string),
        fingerprint,
    }
}
