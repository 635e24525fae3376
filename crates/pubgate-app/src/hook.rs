//! The `install-hook` use case: write a `pre-push` hook that runs the gate.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

/// First comment line of every hook this tool writes. Used to recognise our own hook.
pub const HOOK_MARKER: &str = "# installed by pubgate";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookOutcome {
    /// No hook existed before.
    Installed(Utf8PathBuf),
    /// A previous pubgate hook (or, with `force`, a foreign hook) was overwritten.
    Replaced(Utf8PathBuf),
}

impl HookOutcome {
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Installed(p) | Self::Replaced(p) => p,
        }
    }
}

/// Shell script for the hook. `program` is the gate executable to run.
pub fn hook_script(program: &str) -> String {
    format!(
        "#!/bin/sh\n\
         {HOOK_MARKER}\n\
         # Blocks the push when the publish audit fails.\n\
         root=$(git rev-parse --show-toplevel) || exit 1\n\
         {program} --repo-root \"$root\" check\n\
         status=$?\n\
         if [ \"$status\" -ne 0 ]; then\n\
         \x20 echo \"pubgate: push blocked (exit $status)\" >&2\n\
         \x20 exit \"$status\"\n\
         fi\n",
        program = shell_quote(program),
    )
}

/// Install the `pre-push` hook under `<repo_root>/.git/hooks`.
///
/// An existing hook that does not carry [`HOOK_MARKER`] is left alone unless `force` is set.
pub fn install_hook(
    repo_root: &Utf8Path,
    program: &str,
    force: bool,
) -> anyhow::Result<HookOutcome> {
    let git_dir = repo_root.join(".git");
    if !git_dir.is_dir() {
        bail!("{git_dir} is not a directory; install the hook manually");
    }
    let hooks_dir = git_dir.join("hooks");
    std::fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("create directory: {hooks_dir}"))?;

    let path = hooks_dir.join("pre-push");
    let existed = path.exists();
    if existed && !force {
        let current =
            std::fs::read_to_string(&path).with_context(|| format!("read hook: {path}"))?;
        if !current.contains(HOOK_MARKER) {
            bail!("{path} was not written by pubgate; rerun with --force to replace it");
        }
    }

    std::fs::write(&path, hook_script(program)).with_context(|| format!("write hook: {path}"))?;
    make_executable(&path)?;
    info!(%path, replaced = existed, "pre-push hook written");

    Ok(if existed {
        HookOutcome::Replaced(path)
    } else {
        HookOutcome::Installed(path)
    })
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(unix)]
fn make_executable(path: &Utf8Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .with_context(|| format!("chmod hook: {path}"))
}

#[cfg(not(unix))]
fn make_executable(_path: &Utf8Path) -> anyhow::Result<()> {
    Ok(())
}
