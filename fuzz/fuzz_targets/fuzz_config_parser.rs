//! Fuzz target for `pubgate.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! Errors are expected for most inputs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = pubgate_settings::parse_config_toml(text) {
        let _ = pubgate_settings::resolve_config(cfg, pubgate_settings::Overrides::default());
    }
});
