//! Rendering utilities for terminal and CI surfaces (text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use text::render_text;

use pubgate_types::Violation;

/// `path` or `path:line` for content violations.
pub(crate) fn location(v: &Violation) -> String {
    match v.line {
        Some(line) => format!("{}:{}", v.path, line),
        None => v.path.to_string(),
    }
}
