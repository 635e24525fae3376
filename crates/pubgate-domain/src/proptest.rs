//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - audit determinism
//! - per-path classification independence
//! - rule-order independence
//! - allowlist strictness when rules are removed

use crate::engine::{AuditInput, audit};
use crate::policy::{AllowRule, DenyRule, GateConfig};
use crate::rules::{AllowRules, RuleSet};
use crate::test_support::compile;
use pubgate_types::{GateMode, RepoPath, Verdict};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// Small alphabet so generated rules and paths actually collide.
fn arb_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("src".to_string()),
        Just("data".to_string()),
        Just("raw".to_string()),
        Just("docs".to_string()),
        Just("reports".to_string()),
        Just("figures".to_string()),
        "[a-c]{1,2}",
    ]
}

fn arb_file() -> impl Strategy<Value = String> {
    (
        "[a-c]{1,3}",
        prop_oneof![
            Just(".md"),
            Just(".png"),
            Just(".csv"),
            Just(".parquet"),
            Just(".py")
        ],
    )
        .prop_map(|(stem, ext)| format!("{stem}{ext}"))
}

fn arb_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(arb_segment(), 0..3), arb_file()).prop_map(|(dirs, file)| {
        let mut parts = dirs;
        parts.push(file);
        parts.join("/")
    })
}

fn arb_allow_rule() -> impl Strategy<Value = AllowRule> {
    prop_oneof![
        arb_path().prop_map(AllowRule::Exact),
        (
            prop::collection::vec(arb_segment(), 0..2),
            prop_oneof![Just("*.md"), Just("*.png"), Just("**")],
        )
            .prop_map(|(dirs, tail)| {
                let mut parts = dirs;
                parts.push(tail.to_string());
                AllowRule::Glob(parts.join("/"))
            }),
    ]
}

fn arb_deny_rule() -> impl Strategy<Value = DenyRule> {
    prop_oneof![
        arb_segment().prop_map(|s| DenyRule::prefix(format!("{s}/"))),
        prop_oneof![Just(".parquet"), Just(".csv"), Just(".py")].prop_map(DenyRule::suffix),
        arb_segment().prop_map(|s| DenyRule::glob(format!("**/{s}/*"))),
    ]
}

fn arb_mode() -> impl Strategy<Value = GateMode> {
    prop_oneof![
        Just(GateMode::Allowlist),
        Just(GateMode::Denylist),
        Just(GateMode::Combined),
    ]
}

fn arb_config() -> impl Strategy<Value = GateConfig> {
    (
        arb_mode(),
        prop::collection::vec(arb_allow_rule(), 0..6),
        prop::collection::vec(arb_deny_rule(), 0..4),
    )
        .prop_map(|(mode, allow, deny)| GateConfig {
            preset: "prop".to_string(),
            mode,
            allow,
            deny,
            ..GateConfig::default()
        })
}

fn input_of(paths: &[String]) -> AuditInput {
    AuditInput {
        paths: paths.iter().map(RepoPath::new).collect(),
        ..AuditInput::default()
    }
}

/// Violations for a single path as `(category, reason)` pairs.
fn violations_for(report: &crate::report::DomainReport, path: &str) -> Vec<(String, String)> {
    report
        .violations
        .iter()
        .filter(|v| v.path.as_str() == path)
        .map(|v| (v.category.as_str().to_string(), v.reason.clone()))
        .collect()
}

proptest! {
    #[test]
    fn audit_is_idempotent(
        cfg in arb_config(),
        paths in prop::collection::vec(arb_path(), 0..12),
    ) {
        let rules = compile(&cfg);
        let input = input_of(&paths);
        prop_assert_eq!(audit(&input, &rules), audit(&input, &rules));
    }

    #[test]
    fn candidate_order_does_not_change_report(
        cfg in arb_config(),
        paths in prop::collection::vec(arb_path(), 0..12),
    ) {
        let rules = compile(&cfg);
        let mut reversed = paths.clone();
        reversed.reverse();
        prop_assert_eq!(audit(&input_of(&paths), &rules), audit(&input_of(&reversed), &rules));
    }

    #[test]
    fn adding_a_file_never_changes_other_classifications(
        cfg in arb_config(),
        paths in prop::collection::vec(arb_path(), 1..10),
        extra in arb_path(),
    ) {
        prop_assume!(!paths.contains(&extra));
        let rules = compile(&cfg);
        let before = audit(&input_of(&paths), &rules);

        let mut grown = paths.clone();
        grown.push(extra);
        let after = audit(&input_of(&grown), &rules);

        for p in &paths {
            let key = RepoPath::new(p);
            prop_assert_eq!(
                violations_for(&before, key.as_str()),
                violations_for(&after, key.as_str())
            );
        }
    }

    #[test]
    fn rule_order_does_not_change_verdict_per_path(
        cfg in arb_config(),
        path in arb_path(),
    ) {
        let rules = compile(&cfg);
        let mut reversed_cfg = cfg.clone();
        reversed_cfg.allow.reverse();
        reversed_cfg.deny.reverse();
        let reversed = compile(&reversed_cfg);

        let p = RepoPath::new(&path);
        let a = rules.classify(&p);
        let b = reversed.classify(&p);
        prop_assert_eq!(a.allowed, b.allowed);
        let ra: BTreeSet<_> = a.deny_reasons.into_iter().collect();
        let rb: BTreeSet<_> = b.deny_reasons.into_iter().collect();
        prop_assert_eq!(ra, rb);
    }

    #[test]
    fn removing_an_exact_allow_rule_only_affects_its_path(
        allow in prop::collection::vec(arb_allow_rule(), 1..6),
        paths in prop::collection::vec(arb_path(), 1..10),
        idx in any::<prop::sample::Index>(),
    ) {
        let removed_at = idx.index(allow.len());
        let AllowRule::Exact(removed) = allow[removed_at].clone() else {
            return Ok(());
        };

        let full = GateConfig {
            mode: GateMode::Allowlist,
            allow: allow.clone(),
            ..GateConfig::default()
        };
        let mut remaining = allow.clone();
        remaining.remove(removed_at);
        let reduced = GateConfig {
            mode: GateMode::Allowlist,
            allow: remaining.clone(),
            ..GateConfig::default()
        };

        let full_rules = compile(&full);
        let reduced_rules = compile(&reduced);

        for p in &paths {
            let key = RepoPath::new(p);
            let was = full_rules.allow.is_allowed(&key);
            let now = reduced_rules.allow.is_allowed(&key);
            if key.as_str() == removed {
                prop_assert!(was);
                // Still allowed only if another single rule covers it.
                let covered_by_other = remaining.iter().any(|r| {
                    AllowRules::compile(std::slice::from_ref(r))
                        .expect("compile")
                        .is_allowed(&key)
                });
                prop_assert_eq!(now, covered_by_other);
            } else {
                prop_assert_eq!(was, now);
            }
        }
    }

    #[test]
    fn prefix_deny_never_matches_nested_occurrence(
        prefix in arb_segment(),
        parent in arb_segment(),
        file in arb_file(),
    ) {
        let rules = RuleSet::compile(&GateConfig {
            mode: GateMode::Denylist,
            deny: vec![DenyRule::prefix(format!("{prefix}/"))],
            ..GateConfig::default()
        }).expect("compile");
        prop_assume!(parent != prefix);

        let rooted = RepoPath::new(format!("{prefix}/{file}"));
        let nested = RepoPath::new(format!("{parent}/{prefix}/{file}"));
        prop_assert!(rules.deny.is_forbidden(&rooted).0);
        prop_assert!(!rules.deny.is_forbidden(&nested).0);
    }

    #[test]
    fn verdict_fails_iff_violations_exist(
        cfg in arb_config(),
        paths in prop::collection::vec(arb_path(), 0..12),
    ) {
        let report = audit(&input_of(&paths), &compile(&cfg));
        prop_assert_eq!(report.verdict == Verdict::Fail, !report.violations.is_empty());
    }
}
