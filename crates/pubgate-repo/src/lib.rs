//! Repository adapters: list candidate paths from git, locate the repository root,
//! and read the text of content-checked files.
//!
//! This crate is allowed to do filesystem IO and to spawn `git`. Everything it
//! produces is handed to the pure domain crate as plain values.

#![forbid(unsafe_code)]

mod content;
mod discover;
mod source;

pub use content::load_contents;
pub use discover::{discover_repo_root, locate_repo_root};
pub use source::{
    CandidateSet, GitPathSource, PathSource, SourceError, StaticPathSource, collect_candidates,
};
