use serde::{Deserialize, Serialize};

/// `pubgate.toml` schema v1.
///
/// Unknown keys are rejected: a misspelled table must not silently widen what gets published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PubgateConfigV1 {
    /// Optional schema string for tooling (`pubgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Embedded base rule set: `public`, `patterns`, or `empty`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// `allowlist`, `denylist`, or `combined`. Defaults to the preset's mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// When `false`, the preset contributes its mode only, not its rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend_preset: Option<bool>,

    #[serde(default)]
    pub allow: AllowConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<DenyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowConfig {
    /// Exact repo-relative paths.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Anchored globs; `*` does not cross `/`, `**` does.
    #[serde(default)]
    pub globs: Vec<String>,
}

/// One `[[deny]]` entry. Exactly one of `prefix`, `suffix`, `glob`, `regex` must be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DenyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub fragments: Vec<String>,
}
