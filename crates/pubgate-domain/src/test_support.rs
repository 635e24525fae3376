use crate::engine::AuditInput;
use crate::policy::{AllowRule, ContentRule, DenyRule, GateConfig};
use crate::rules::RuleSet;
use pubgate_types::{GateMode, RepoPath};

pub fn allowlist_config(exact: &[&str], globs: &[&str]) -> GateConfig {
    let mut allow: Vec<AllowRule> = exact
        .iter()
        .map(|s| AllowRule::Exact(s.to_string()))
        .collect();
    allow.extend(globs.iter().map(|s| AllowRule::Glob(s.to_string())));
    GateConfig {
        preset: "test".to_string(),
        mode: GateMode::Allowlist,
        allow,
        ..GateConfig::default()
    }
}

pub fn denylist_config(deny: Vec<DenyRule>) -> GateConfig {
    GateConfig {
        preset: "test".to_string(),
        mode: GateMode::Denylist,
        deny,
        ..GateConfig::default()
    }
}

pub fn content_rule(files: &[&str], fragments: &[&str]) -> ContentRule {
    ContentRule {
        files: files.iter().map(RepoPath::new).collect(),
        fragments: fragments.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn compile(cfg: &GateConfig) -> RuleSet {
    RuleSet::compile(cfg).expect("test rules compile")
}

pub fn input(paths: &[&str]) -> AuditInput {
    AuditInput {
        paths: paths.iter().map(RepoPath::new).collect(),
        ..AuditInput::default()
    }
}
