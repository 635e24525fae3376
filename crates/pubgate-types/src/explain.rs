//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// State that would trigger a violation.
    pub before: &'static str,
    /// State that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_PUBLISH_ALLOWLIST | ids::CODE_NOT_IN_ALLOWLIST => Some(explain_allowlist()),
        ids::CHECK_PUBLISH_DENYLIST | ids::CODE_FORBIDDEN_PATH => Some(explain_denylist()),
        ids::CHECK_PUBLISH_CONTENT | ids::CODE_PRIVATE_PATH_REFERENCE => Some(explain_content()),
        ids::CHECK_TOOL_SOURCE | ids::CODE_SOURCE_UNAVAILABLE => Some(explain_source()),
        _ => None,
    }
}

/// Short remediation hint attached to violations of the given code.
pub fn remediation_hint(code: &str) -> Option<&'static str> {
    match code {
        ids::CODE_NOT_IN_ALLOWLIST => {
            Some("Remove the file from the public tree, or add it to the allowlist if it is meant to be published.")
        }
        ids::CODE_FORBIDDEN_PATH => {
            Some("Untrack the file (`git rm --cached <path>`) and keep it in the private repository.")
        }
        ids::CODE_PRIVATE_PATH_REFERENCE => {
            Some("Remove private path references from content.")
        }
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_PUBLISH_ALLOWLIST,
        ids::CHECK_PUBLISH_DENYLIST,
        ids::CHECK_PUBLISH_CONTENT,
        ids::CHECK_TOOL_SOURCE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_NOT_IN_ALLOWLIST,
        ids::CODE_FORBIDDEN_PATH,
        ids::CODE_PRIVATE_PATH_REFERENCE,
        ids::CODE_SOURCE_UNAVAILABLE,
    ]
}

fn explain_allowlist() -> Explanation {
    Explanation {
        title: "Publish Allowlist",
        description: "\
Every tracked or staged file must match an allow rule: either an exact path
(`README.md`, `LICENSE`) or a glob (`reports/figures/*.png`).

Anything else is treated as private. `*` never crosses a `/`, so a rule for
`reports/figures/*.png` does not publish `reports/figures/sub/lift.png`.",
        remediation: "\
Decide whether the file belongs in the public repository:
- If not, untrack it: `git rm --cached <path>` and add it to `.gitignore`
- If it does, add an exact entry under `[allow] paths` or a glob under
  `[allow] globs` in `pubgate.toml`",
        examples: ExamplePair {
            before: "\
[allow]
paths = [\"README.md\"]
# tracked: README.md, src/private.py",
            after: "\
[allow]
paths = [\"README.md\"]
# tracked: README.md",
        },
    }
}

fn explain_denylist() -> Explanation {
    Explanation {
        title: "Forbidden Paths",
        description: "\
Deny rules name paths that must never be published regardless of the
allowlist: private engine code, raw or processed data directories, archives
and serialized tables.

Prefix rules match paths rooted exactly at the prefix. Suffix rules match at
any depth.",
        remediation: "\
Untrack the file and keep it in the private repository:
- `git rm --cached <path>`
- add the directory or extension to `.gitignore`
Never rewrite a deny rule just to let a push through.",
        examples: ExamplePair {
            before: "\
[[deny]]
prefix = \"data/raw/\"
# tracked: data/raw/dump.csv",
            after: "\
[[deny]]
prefix = \"data/raw/\"
# tracked: (nothing under data/raw/)",
        },
    }
}

fn explain_content() -> Explanation {
    Explanation {
        title: "Private Path References",
        description: "\
Listed text files (typically the top-level README) must not mention private
directory names. A file that is never tracked can still leak through prose
that describes where it lives.",
        remediation: "\
Remove private path references from content. Describe the artifact instead of
linking to its private location.",
        examples: ExamplePair {
            before: "See `src/lift_model.py` for the decay fit.",
            after: "The decay fit is part of the private analysis engine.",
        },
    }
}

fn explain_source() -> Explanation {
    Explanation {
        title: "Path Source Unavailable",
        description: "\
The gate could not list tracked or staged files (not a git repository, `git`
missing from PATH, or the command failed). An audit with no file list is not
a pass.",
        remediation: "\
Run the gate from inside the repository, or pass `--repo-root`. Check that
`git ls-files` works in that directory.",
        examples: ExamplePair {
            before: "pubgate --repo-root /tmp check",
            after: "pubgate --repo-root ~/src/public-repo check",
        },
    }
}
