use camino::{Utf8Path, Utf8PathBuf};
use pubgate_types::{RepoPath, SourceStatus, SourceSummary};
use std::collections::{BTreeMap, BTreeSet};
use std::process::Command;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to spawn git in {root}")]
    Spawn {
        root: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`git {args}` failed ({status}): {stderr}")]
    Command {
        args: String,
        status: String,
        stderr: String,
    },
    #[error("{0}")]
    Unavailable(String),
}

/// Where candidate paths come from.
///
/// Implementations report failures; [`collect_candidates`] decides how to degrade.
pub trait PathSource {
    /// All paths currently tracked by version control.
    fn list_tracked(&self) -> Result<Vec<RepoPath>, SourceError>;

    /// All paths staged for the next commit (added, copied, modified, renamed, type-changed).
    fn list_staged(&self) -> Result<Vec<RepoPath>, SourceError>;

    /// The bytes of `path` as recorded in the index, which is what gets committed
    /// and pushed. The working copy may differ.
    fn read_indexed(&self, path: &RepoPath) -> Result<Vec<u8>, SourceError>;
}

/// Queries the `git` binary in a repository root.
#[derive(Clone, Debug)]
pub struct GitPathSource {
    root: Utf8PathBuf,
}

impl GitPathSource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>, SourceError> {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()
            .map_err(|source| SourceError::Spawn {
                root: self.root.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Command {
                args: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    fn list(&self, args: &[&str]) -> Result<Vec<RepoPath>, SourceError> {
        self.run(args).map(|stdout| parse_nul_separated(&stdout))
    }
}

impl PathSource for GitPathSource {
    fn list_tracked(&self) -> Result<Vec<RepoPath>, SourceError> {
        self.list(&["ls-files", "-z"])
    }

    fn list_staged(&self) -> Result<Vec<RepoPath>, SourceError> {
        self.list(&["diff", "--cached", "--name-only", "-z", "--diff-filter=ACMRT"])
    }

    fn read_indexed(&self, path: &RepoPath) -> Result<Vec<u8>, SourceError> {
        // `:<path>` names the stage-0 index entry.
        let spec = format!(":{path}");
        self.run(&["cat-file", "blob", spec.as_str()])
    }
}

fn parse_nul_separated(stdout: &[u8]) -> Vec<RepoPath> {
    String::from_utf8_lossy(stdout)
        .split('\0')
        .filter(|s| !s.is_empty())
        .map(RepoPath::new)
        .collect()
}

/// Literal path lists, for tests and dry runs.
///
/// Only files registered with [`StaticPathSource::with_indexed`] have index content.
#[derive(Clone, Debug)]
pub struct StaticPathSource {
    tracked: Result<Vec<RepoPath>, String>,
    staged: Result<Vec<RepoPath>, String>,
    indexed: BTreeMap<RepoPath, Vec<u8>>,
}

impl Default for StaticPathSource {
    fn default() -> Self {
        Self {
            tracked: Ok(Vec::new()),
            staged: Ok(Vec::new()),
            indexed: BTreeMap::new(),
        }
    }
}

impl StaticPathSource {
    pub fn new<T: AsRef<str>, S: AsRef<str>>(tracked: &[T], staged: &[S]) -> Self {
        Self {
            tracked: Ok(tracked.iter().map(RepoPath::new).collect()),
            staged: Ok(staged.iter().map(RepoPath::new).collect()),
            indexed: BTreeMap::new(),
        }
    }

    /// A source whose every query fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            tracked: Err(reason.clone()),
            staged: Err(reason),
            indexed: BTreeMap::new(),
        }
    }

    /// Make only the staged query fail.
    pub fn with_staged_unavailable(mut self, reason: impl Into<String>) -> Self {
        self.staged = Err(reason.into());
        self
    }

    /// Record the index content of `path`.
    pub fn with_indexed(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.indexed.insert(RepoPath::new(path), contents.into());
        self
    }
}

impl PathSource for StaticPathSource {
    fn list_tracked(&self) -> Result<Vec<RepoPath>, SourceError> {
        self.tracked.clone().map_err(SourceError::Unavailable)
    }

    fn list_staged(&self) -> Result<Vec<RepoPath>, SourceError> {
        self.staged.clone().map_err(SourceError::Unavailable)
    }

    fn read_indexed(&self, path: &RepoPath) -> Result<Vec<u8>, SourceError> {
        self.indexed
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("{path} has no index entry")))
    }
}

/// The deduplicated, sorted union of tracked and staged paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub paths: Vec<RepoPath>,
    pub sources: SourceSummary,
}

/// Query both lists, degrading a failed query to an empty list.
///
/// Failures are recorded in [`CandidateSet::sources`] so callers can tell
/// "no files" apart from "could not list files".
pub fn collect_candidates(source: &dyn PathSource) -> CandidateSet {
    let (tracked, tracked_status) = soft("tracked", source.list_tracked());
    let (staged, staged_status) = soft("staged", source.list_staged());

    let paths: BTreeSet<RepoPath> = tracked.into_iter().chain(staged).collect();
    debug!(candidates = paths.len(), "collected candidate paths");

    CandidateSet {
        paths: paths.into_iter().collect(),
        sources: SourceSummary {
            tracked: tracked_status,
            staged: staged_status,
        },
    }
}

fn soft(
    label: &str,
    result: Result<Vec<RepoPath>, SourceError>,
) -> (Vec<RepoPath>, SourceStatus) {
    match result {
        Ok(paths) => {
            debug!(source = label, paths = paths.len(), "listed paths");
            let count = u32::try_from(paths.len()).unwrap_or(u32::MAX);
            (paths, SourceStatus::Available { paths: count })
        }
        Err(err) => {
            warn!(source = label, error = %err, "could not list {label} files; treating as empty");
            (
                Vec::new(),
                SourceStatus::Unavailable {
                    reason: err.to_string(),
                },
            )
        }
    }
}
