//! Compiled rule matchers.
//!
//! Every glob and regex is compiled once per run. Matching is case-sensitive and
//! order-independent: a path either matches the allow set or it does not, and it
//! triggers the same deny reasons whatever order the rules were declared in.

use crate::policy::{AllowRule, ContentRule, DenyMatcher, GateConfig};
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use pubgate_types::{GateMode, RepoPath};
use regex::Regex;
use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid allow glob `{pattern}`")]
    InvalidAllowGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("invalid deny glob `{pattern}`")]
    InvalidDenyGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("invalid deny regex `{pattern}`")]
    InvalidDenyRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("empty {kind} pattern")]
    EmptyPattern { kind: &'static str },
}

/// Per-path classification against both rule families.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub allowed: bool,
    pub deny_reasons: Vec<String>,
}

impl Classification {
    pub fn is_blocked(&self, mode: GateMode) -> bool {
        (mode.checks_allowlist() && !self.allowed)
            || (mode.checks_denylist() && !self.deny_reasons.is_empty())
    }
}

#[derive(Clone, Debug)]
pub struct AllowRules {
    exact: BTreeSet<String>,
    globs: GlobSet,
}

impl AllowRules {
    pub fn compile(rules: &[AllowRule]) -> Result<Self, RuleError> {
        let mut exact = BTreeSet::new();
        let mut builder = GlobSetBuilder::new();
        for rule in rules {
            match rule {
                AllowRule::Exact(p) => {
                    if p.is_empty() {
                        return Err(RuleError::EmptyPattern { kind: "allow path" });
                    }
                    exact.insert(p.clone());
                }
                AllowRule::Glob(p) => {
                    if p.is_empty() {
                        return Err(RuleError::EmptyPattern { kind: "allow glob" });
                    }
                    let glob = path_glob(p).map_err(|source| RuleError::InvalidAllowGlob {
                        pattern: p.clone(),
                        source,
                    })?;
                    builder.add(glob);
                }
            }
        }
        let globs = builder
            .build()
            .map_err(|source| RuleError::InvalidAllowGlob {
                pattern: "<allow set>".to_string(),
                source,
            })?;
        Ok(Self { exact, globs })
    }

    /// True iff `path` equals an exact entry or matches at least one glob.
    pub fn is_allowed(&self, path: &RepoPath) -> bool {
        self.exact.contains(path.as_str()) || self.globs.is_match(path.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.globs.is_empty()
    }
}

#[derive(Clone, Debug)]
enum CompiledMatcher {
    Prefix(String),
    Suffix(String),
    Glob(GlobMatcher),
    Regex(Regex),
}

impl CompiledMatcher {
    fn is_match(&self, path: &str) -> bool {
        match self {
            CompiledMatcher::Prefix(p) => path.starts_with(p.as_str()),
            CompiledMatcher::Suffix(s) => path.ends_with(s.as_str()),
            CompiledMatcher::Glob(g) => g.is_match(path),
            CompiledMatcher::Regex(r) => r.is_match(path),
        }
    }
}

#[derive(Clone, Debug)]
struct CompiledDeny {
    matcher: CompiledMatcher,
    reason: String,
}

#[derive(Clone, Debug, Default)]
pub struct DenyRules {
    rules: Vec<CompiledDeny>,
}

impl DenyRules {
    pub fn compile(rules: &[crate::policy::DenyRule]) -> Result<Self, RuleError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let matcher = match &rule.matcher {
                DenyMatcher::Prefix(p) => {
                    non_empty(p, "deny prefix")?;
                    CompiledMatcher::Prefix(p.clone())
                }
                DenyMatcher::Suffix(s) => {
                    non_empty(s, "deny suffix")?;
                    CompiledMatcher::Suffix(s.clone())
                }
                DenyMatcher::Glob(p) => {
                    non_empty(p, "deny glob")?;
                    let glob = path_glob(p).map_err(|source| RuleError::InvalidDenyGlob {
                        pattern: p.clone(),
                        source,
                    })?;
                    CompiledMatcher::Glob(glob.compile_matcher())
                }
                DenyMatcher::Regex(p) => {
                    non_empty(p, "deny regex")?;
                    let re = Regex::new(p).map_err(|source| RuleError::InvalidDenyRegex {
                        pattern: p.clone(),
                        source,
                    })?;
                    CompiledMatcher::Regex(re)
                }
            };
            compiled.push(CompiledDeny {
                matcher,
                reason: rule.effective_reason(),
            });
        }
        Ok(Self { rules: compiled })
    }

    /// Every matching rule's reason, in declaration order.
    pub fn is_forbidden(&self, path: &RepoPath) -> (bool, Vec<String>) {
        let reasons: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matcher.is_match(path.as_str()))
            .map(|rule| rule.reason.clone())
            .collect();
        (!reasons.is_empty(), reasons)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The full compiled rule set for one invocation.
#[derive(Clone, Debug)]
pub struct RuleSet {
    pub mode: GateMode,
    pub allow: AllowRules,
    pub deny: DenyRules,
    pub content: ContentRule,
}

impl RuleSet {
    pub fn compile(cfg: &GateConfig) -> Result<Self, RuleError> {
        for fragment in &cfg.content.fragments {
            non_empty(fragment, "content fragment")?;
        }
        Ok(Self {
            mode: cfg.mode,
            allow: AllowRules::compile(&cfg.allow)?,
            deny: DenyRules::compile(&cfg.deny)?,
            content: cfg.content.clone(),
        })
    }

    pub fn classify(&self, path: &RepoPath) -> Classification {
        let (_, deny_reasons) = self.deny.is_forbidden(path);
        Classification {
            allowed: self.allow.is_allowed(path),
            deny_reasons,
        }
    }
}

fn path_glob(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

fn non_empty(pattern: &str, kind: &'static str) -> Result<(), RuleError> {
    if pattern.is_empty() {
        return Err(RuleError::EmptyPattern { kind });
    }
    Ok(())
}
