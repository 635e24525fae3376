//! Config parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{AllowConfig, ContentConfig, DenyConfig, PubgateConfigV1};
pub use presets::{DEFAULT_PRESET, preset, preset_names};
pub use resolve::{Overrides, ResolvedConfig, parse_mode};

/// Parse `pubgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PubgateConfigV1> {
    let cfg: PubgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective rule set (preset + config file + overrides) and compile it.
pub fn resolve_config(
    cfg: PubgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
