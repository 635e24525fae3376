//! The `rules` use case: print the resolved rule set.

use pubgate_domain::policy::{AllowRule, DenyMatcher, GateConfig};
use std::fmt::Write;

/// Human-readable listing of the effective rules, in configuration order.
pub fn describe_rules(cfg: &GateConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "preset: {}", cfg.preset);
    let _ = writeln!(out, "mode:   {}", cfg.mode);

    if cfg.mode.checks_allowlist() {
        let _ = writeln!(out, "\nallow ({}):", cfg.allow.len());
        for rule in &cfg.allow {
            match rule {
                AllowRule::Exact(p) => {
                    let _ = writeln!(out, "  path  {p}");
                }
                AllowRule::Glob(g) => {
                    let _ = writeln!(out, "  glob  {g}");
                }
            }
        }
    }

    if cfg.mode.checks_denylist() {
        let _ = writeln!(out, "\ndeny ({}):", cfg.deny.len());
        for rule in &cfg.deny {
            let (kind, pattern) = match &rule.matcher {
                DenyMatcher::Prefix(p) => ("prefix", p),
                DenyMatcher::Suffix(s) => ("suffix", s),
                DenyMatcher::Glob(g) => ("glob", g),
                DenyMatcher::Regex(r) => ("regex", r),
            };
            let _ = writeln!(out, "  {kind:<6} {pattern}  ({})", rule.effective_reason());
        }
    }

    if !cfg.content.is_empty() {
        let files: Vec<&str> = cfg.content.files.iter().map(|f| f.as_str()).collect();
        let _ = writeln!(out, "\ncontent:");
        let _ = writeln!(out, "  files      {}", files.join(", "));
        let _ = writeln!(out, "  fragments  {}", cfg.content.fragments.join(", "));
    }

    out
}
