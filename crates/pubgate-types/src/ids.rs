//! Stable identifiers for checks and violation codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_PUBLISH_ALLOWLIST: &str = "publish.allowlist";
pub const CHECK_PUBLISH_DENYLIST: &str = "publish.denylist";
pub const CHECK_PUBLISH_CONTENT: &str = "publish.content";

// Codes: publish.allowlist
pub const CODE_NOT_IN_ALLOWLIST: &str = "not_in_allowlist";

// Codes: publish.denylist
pub const CODE_FORBIDDEN_PATH: &str = "forbidden_path";

// Codes: publish.content
pub const CODE_PRIVATE_PATH_REFERENCE: &str = "private_path_reference";

// Tool-level
pub const CHECK_TOOL_SOURCE: &str = "tool.source";
pub const CODE_SOURCE_UNAVAILABLE: &str = "source_unavailable";

/// Reason recorded for every allowlist miss.
pub const REASON_NOT_IN_ALLOWLIST: &str = "not in allowlist";

/// Note attached to an audit with zero candidate paths.
pub const NOTE_NOTHING_TO_VALIDATE: &str = "nothing to validate";
