use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use tracing::debug;

/// Walk up from `start` to the nearest directory containing `.git`
/// (a directory, or a file for worktrees and submodules).
pub fn discover_repo_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Utf8Path::to_path_buf)
}

/// Resolve the repository root the gate should audit.
///
/// Order:
/// 1. `explicit` (must exist; used as-is, canonicalized when possible)
/// 2. the current directory, walking up
/// 3. the directory the running executable lives in, walking up
///
/// Git runs hooks with the pushed repository as the current directory.
pub fn locate_repo_root(explicit: Option<&Utf8Path>) -> anyhow::Result<Utf8PathBuf> {
    if let Some(root) = explicit {
        if !root.exists() {
            anyhow::bail!("repo root does not exist: {root}");
        }
        return Ok(root
            .canonicalize_utf8()
            .unwrap_or_else(|_| root.to_path_buf()));
    }

    let cwd = std::env::current_dir().context("read current directory")?;
    let cwd = pathbuf_to_utf8(cwd).context("current directory is not valid UTF-8")?;
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .and_then(pathbuf_to_utf8);

    let from_cwd = discover_repo_root(&cwd);
    let from_exe = exe_dir.as_deref().and_then(discover_repo_root);
    let (root, origin) = choose_root(from_cwd, from_exe)
        .with_context(|| format!("no git repository found above {cwd} or the executable"))?;
    debug!(%root, origin, "repository root discovered");
    Ok(root)
}

fn choose_root(
    from_cwd: Option<Utf8PathBuf>,
    from_exe: Option<Utf8PathBuf>,
) -> Option<(Utf8PathBuf, &'static str)> {
    match (from_cwd, from_exe) {
        (Some(root), _) => Some((root, "current directory")),
        (None, Some(root)) => Some((root, "executable location")),
        (None, None) => None,
    }
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
