use crate::model::{DenyConfig, PubgateConfigV1};
use crate::presets;
use anyhow::Context;
use pubgate_domain::RuleSet;
use pubgate_domain::policy::{AllowRule, DenyRule, GateConfig};
use pubgate_types::{GateMode, RepoPath};
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// The merged configuration value handed to the auditor.
    pub effective: GateConfig,
    /// Rules compiled from `effective`.
    pub rules: RuleSet,
    /// Rule sets that resolve but cannot do useful work (already logged).
    pub warnings: Vec<String>,
}

pub fn resolve_config(
    cfg: PubgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let preset_name = overrides
        .preset
        .clone()
        .or(cfg.preset.clone())
        .unwrap_or_else(|| presets::DEFAULT_PRESET.to_string());

    let base = presets::preset(&preset_name).with_context(|| {
        format!(
            "unknown preset: {preset_name} (expected one of: {})",
            presets::preset_names().join(", ")
        )
    })?;

    let mut effective = if cfg.extend_preset.unwrap_or(true) {
        base
    } else {
        GateConfig {
            preset: base.preset,
            mode: base.mode,
            ..GateConfig::default()
        }
    };

    // Mode: CLI override, then config, then preset.
    if let Some(mode_s) = overrides.mode.as_deref().or(cfg.mode.as_deref()) {
        effective.mode = parse_mode(mode_s)?;
    }

    for path in &cfg.allow.paths {
        effective
            .allow
            .push(AllowRule::Exact(RepoPath::new(path).as_str().to_string()));
    }
    for glob in &cfg.allow.globs {
        effective.allow.push(AllowRule::Glob(glob.clone()));
    }

    for (idx, entry) in cfg.deny.iter().enumerate() {
        let rule = deny_rule(entry).with_context(|| format!("invalid deny entry #{}", idx + 1))?;
        effective.deny.push(rule);
    }

    if let Some(content) = &cfg.content {
        for file in &content.files {
            let file = RepoPath::new(file);
            if !effective.content.files.contains(&file) {
                effective.content.files.push(file);
            }
        }
        for fragment in &content.fragments {
            if !effective.content.fragments.contains(fragment) {
                effective.content.fragments.push(fragment.clone());
            }
        }
    }

    let rules = RuleSet::compile(&effective).context("compile rule set")?;

    let warnings = posture_warnings(&effective);
    for message in &warnings {
        warn!(preset = %effective.preset, mode = %effective.mode, "{message}");
    }

    Ok(ResolvedConfig {
        effective,
        rules,
        warnings,
    })
}

/// A mode whose rule list is empty either blocks everything or checks nothing.
fn posture_warnings(cfg: &GateConfig) -> Vec<String> {
    let mut out = Vec::new();
    if cfg.mode.checks_allowlist() && cfg.allow.is_empty() {
        out.push(format!(
            "{} mode has no allow rules; every path will be blocked",
            cfg.mode
        ));
    }
    if cfg.mode.checks_denylist() && cfg.deny.is_empty() {
        out.push(format!(
            "{} mode has no deny rules; no path can be forbidden",
            cfg.mode
        ));
    }
    out
}

fn deny_rule(entry: &DenyConfig) -> anyhow::Result<DenyRule> {
    let matchers = [
        entry.prefix.clone().map(DenyRule::prefix),
        entry.suffix.clone().map(DenyRule::suffix),
        entry.glob.clone().map(DenyRule::glob),
        entry.regex.clone().map(DenyRule::regex),
    ];
    let mut set = matchers.into_iter().flatten();
    let Some(rule) = set.next() else {
        anyhow::bail!("deny entry needs one of prefix, suffix, glob, regex");
    };
    if set.next().is_some() {
        anyhow::bail!("deny entry sets more than one of prefix, suffix, glob, regex");
    }
    Ok(match &entry.reason {
        Some(reason) => rule.with_reason(reason.clone()),
        None => rule,
    })
}

pub fn parse_mode(v: &str) -> anyhow::Result<GateMode> {
    match v {
        "allowlist" | "allow" => Ok(GateMode::Allowlist),
        "denylist" | "deny" => Ok(GateMode::Denylist),
        "combined" => Ok(GateMode::Combined),
        other => anyhow::bail!("unknown mode: {other} (expected allowlist|denylist|combined)"),
    }
}
