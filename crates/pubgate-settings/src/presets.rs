use pubgate_domain::policy::{AllowRule, ContentRule, DenyRule, GateConfig};
use pubgate_types::{GateMode, RepoPath};

pub const DEFAULT_PRESET: &str = "public";

/// Directory names that must never appear in public prose.
const PRIVATE_FRAGMENTS: &[&str] = &["src/", "data/raw/", "data/processed/", "notebooks/"];

/// Preset rule sets are opinionated defaults.
///
/// Keep these small and readable. Anything repository-specific goes into `pubgate.toml`.
pub fn preset(name: &str) -> Option<GateConfig> {
    match name {
        "public" => Some(public_preset()),
        "patterns" => Some(patterns_preset()),
        "empty" => Some(empty_preset()),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &["public", "patterns", "empty"]
}

/// Strict public-repo gate: only content, docs and figures may be published.
fn public_preset() -> GateConfig {
    let exact = ["README.md", "LICENSE", ".gitignore", "pubgate.toml"];
    let globs = [
        "*.md",
        "docs/**/*.md",
        "reports/figures/*.png",
        "assets/*.png",
        ".github/**",
    ];

    let mut allow: Vec<AllowRule> = exact
        .iter()
        .map(|p| AllowRule::Exact(p.to_string()))
        .collect();
    allow.extend(globs.iter().map(|g| AllowRule::Glob(g.to_string())));

    GateConfig {
        preset: "public".to_string(),
        mode: GateMode::Allowlist,
        allow,
        deny: Vec::new(),
        content: ContentRule {
            files: vec![RepoPath::new("README.md")],
            fragments: PRIVATE_FRAGMENTS.iter().map(|f| f.to_string()).collect(),
        },
    }
}

/// Lighter pattern gate: everything passes unless it looks private.
fn patterns_preset() -> GateConfig {
    let mut deny: Vec<DenyRule> = ["src/", "tests/", "data/raw/", "data/processed/", "notebooks/"]
        .iter()
        .map(|p| DenyRule::prefix(*p))
        .collect();
    deny.extend(
        [".parquet", ".feather", ".pkl", ".zip", ".tar.gz", ".7z"]
            .iter()
            .map(|s| DenyRule::suffix(*s)),
    );

    GateConfig {
        preset: "patterns".to_string(),
        mode: GateMode::Denylist,
        allow: Vec::new(),
        deny,
        content: ContentRule::default(),
    }
}

fn empty_preset() -> GateConfig {
    GateConfig {
        preset: "empty".to_string(),
        mode: GateMode::Allowlist,
        ..GateConfig::default()
    }
}
