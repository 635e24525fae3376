use pubgate_types::{GateMode, RepoPath};

/// One permit rule. Exact entries compare the whole normalized path; globs are
/// anchored to the whole path and `*` never crosses `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowRule {
    Exact(String),
    Glob(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DenyMatcher {
    /// Path starts with the prefix (rooted at the repository root).
    Prefix(String),
    /// Path ends with the suffix, at any depth.
    Suffix(String),
    /// Anchored glob, same dialect as allow globs.
    Glob(String),
    /// Unanchored regular expression; use `^`/`$` to anchor.
    Regex(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenyRule {
    pub matcher: DenyMatcher,
    pub reason: Option<String>,
}

impl DenyRule {
    pub fn prefix(p: impl Into<String>) -> Self {
        Self {
            matcher: DenyMatcher::Prefix(p.into()),
            reason: None,
        }
    }

    pub fn suffix(s: impl Into<String>) -> Self {
        Self {
            matcher: DenyMatcher::Suffix(s.into()),
            reason: None,
        }
    }

    pub fn glob(g: impl Into<String>) -> Self {
        Self {
            matcher: DenyMatcher::Glob(g.into()),
            reason: None,
        }
    }

    pub fn regex(r: impl Into<String>) -> Self {
        Self {
            matcher: DenyMatcher::Regex(r.into()),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// The configured reason, or one derived from the matcher.
    pub fn effective_reason(&self) -> String {
        if let Some(r) = &self.reason {
            return r.clone();
        }
        match &self.matcher {
            DenyMatcher::Prefix(p) => format!("{} is not allowed", p.trim_end_matches('/')),
            DenyMatcher::Suffix(s) => format!("{s} files are not allowed"),
            DenyMatcher::Glob(p) | DenyMatcher::Regex(p) => {
                format!("matches forbidden pattern {p}")
            }
        }
    }
}

/// Text files that must not mention any of the forbidden fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentRule {
    pub files: Vec<RepoPath>,
    pub fragments: Vec<String>,
}

impl ContentRule {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() || self.fragments.is_empty()
    }
}

/// Immutable gate configuration, constructed once per invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateConfig {
    pub preset: String,
    pub mode: GateMode,
    pub allow: Vec<AllowRule>,
    pub deny: Vec<DenyRule>,
    pub content: ContentRule,
}
