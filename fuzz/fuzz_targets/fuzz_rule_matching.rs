//! Fuzz target for rule compilation and path classification.
//!
//! Goal: compiling arbitrary patterns may fail, but must not panic, and a
//! compiled rule set must classify any path deterministically.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_matching
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pubgate_domain::policy::{AllowRule, DenyRule, GateConfig};
use pubgate_domain::RuleSet;
use pubgate_types::{GateMode, RepoPath};

#[derive(Arbitrary, Debug)]
enum Deny {
    Prefix(String),
    Suffix(String),
    Glob(String),
    Regex(String),
}

#[derive(Arbitrary, Debug)]
struct RuleInput {
    exact: Vec<String>,
    globs: Vec<String>,
    deny: Vec<Deny>,
    candidates: Vec<String>,
}

fuzz_target!(|input: RuleInput| {
    if input.globs.len() + input.deny.len() > 20 || input.candidates.len() > 100 {
        return;
    }
    let short = |s: &String| s.len() <= 256;

    let mut allow: Vec<AllowRule> = input
        .exact
        .into_iter()
        .filter(short)
        .map(AllowRule::Exact)
        .collect();
    allow.extend(input.globs.into_iter().filter(short).map(AllowRule::Glob));

    let deny = input
        .deny
        .into_iter()
        .map(|d| match d {
            Deny::Prefix(p) => DenyRule::prefix(p),
            Deny::Suffix(s) => DenyRule::suffix(s),
            Deny::Glob(g) => DenyRule::glob(g),
            Deny::Regex(r) => DenyRule::regex(r),
        })
        .collect();

    let cfg = GateConfig {
        mode: GateMode::Combined,
        allow,
        deny,
        ..GateConfig::default()
    };
    let Ok(rules) = RuleSet::compile(&cfg) else {
        return;
    };

    for candidate in input.candidates.iter().filter(|c| c.len() <= 512) {
        let path = RepoPath::new(candidate);
        assert_eq!(rules.classify(&path), rules.classify(&path));
    }
});
