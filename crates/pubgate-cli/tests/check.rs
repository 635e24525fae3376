//! End-to-end runs of the `pubgate` binary against throwaway git repositories.

use assert_cmd::Command;
use predicates::prelude::*;
use pubgate_test_util::{TempRepo, git_available, normalize_report};
use serde_json::Value;

#[allow(deprecated)]
fn pubgate_in(repo: &TempRepo) -> Command {
    let mut cmd = Command::cargo_bin("pubgate").unwrap();
    cmd.arg("--repo-root").arg(repo.root().as_str());
    cmd.env_remove("RUST_LOG");
    cmd
}

const ALLOWLIST_CONFIG: &str = r#"
preset = "empty"
mode = "allowlist"

[allow]
paths = ["README.md", "pubgate.toml"]
globs = ["reports/figures/*.png"]
"#;

#[test]
fn allowlist_blocks_private_file() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("pubgate.toml", ALLOWLIST_CONFIG)
        .stage("README.md", "# Lift\n")
        .stage("reports/figures/lift.png", "png")
        .stage("src/private.py", "print(1)\n");

    pubgate_in(&repo)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("pubgate: FAIL"))
        .stdout(predicate::str::contains("src/private.py"))
        .stdout(predicate::str::contains("not in allowlist"))
        .stdout(predicate::str::contains("reports/figures/lift.png").not());
}

#[test]
fn default_command_is_check() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("pubgate.toml", ALLOWLIST_CONFIG)
        .stage("README.md", "# Lift\n");

    pubgate_in(&repo)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pubgate: PASS"));
}

#[test]
fn denylist_config_reports_each_reason() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage(
        "pubgate.toml",
        "preset = \"empty\"\nmode = \"denylist\"\n\n[[deny]]\nprefix = \"data/raw/\"\n\n[[deny]]\nsuffix = \".parquet\"\n",
    )
    .stage("README.md", "# Lift\n")
    .stage("data/raw/dump.csv", "a,b\n")
    .stage("out/model.parquet", "PAR1");

    pubgate_in(&repo)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("data/raw is not allowed"))
        .stdout(predicate::str::contains(".parquet files are not allowed"))
        .stdout(predicate::str::contains("README.md ").not());
}

#[test]
fn empty_repository_passes_with_note() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();

    pubgate_in(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to validate"));
}

#[test]
fn non_repository_is_never_a_pass() {
    if !git_available() {
        return;
    }
    let dir = TempRepo::bare_dir();

    pubgate_in(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("could not list repository files"))
        .stdout(predicate::str::contains("PASS").not());
}

#[test]
fn readme_mentioning_private_path_is_blocked() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage(
        "README.md",
        "# Discount lift\n\nThe model lives in src/lift.py.\n",
    );

    pubgate_in(&repo)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("README.md:3"))
        .stdout(predicate::str::contains("content references private path src/"));
}

#[test]
fn preset_override_switches_classifier() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("notes.txt", "hello\n");

    // Public preset in allowlist mode rejects notes.txt; patterns preset does not.
    pubgate_in(&repo).assert().code(1);
    pubgate_in(&repo)
        .args(["--preset", "patterns"])
        .assert()
        .success();
}

#[test]
fn json_report_is_stable_across_runs() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("README.md", "# Lift\n")
        .stage("src/model.py", "x = 1\n")
        .commit("initial");

    let run = || -> Value {
        let out = pubgate_in(&repo)
            .args(["check", "--format", "json"])
            .output()
            .expect("run pubgate");
        assert_eq!(out.status.code(), Some(1));
        normalize_report(serde_json::from_slice(&out.stdout).expect("json stdout"))
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first["schema"], "pubgate.audit.v1");
    assert_eq!(first["verdict"], "fail");
    assert_eq!(first["tool"]["version"], "__VERSION__");
    assert_eq!(first["violations"][0]["path"], "src/model.py");
    assert_eq!(first["violations"][0]["code"], "not_in_allowlist");
}

#[test]
fn report_out_writes_json_file() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("README.md", "# Lift\n");
    let out = repo.root().join("artifacts/pubgate/report.json");

    pubgate_in(&repo)
        .args(["check", "--report-out", out.as_str()])
        .assert()
        .success();

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read report")).expect("json");
    assert_eq!(report["verdict"], "pass");
}

#[test]
fn github_format_emits_error_commands() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("secrets.env", "TOKEN=1\n");

    pubgate_in(&repo)
        .args(["check", "--format", "github"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("::error file=secrets.env"));
}

#[test]
fn invalid_config_fails_loudly() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("pubgate.toml", "[[deny]]\nregex = \"(\"\n");

    pubgate_in(&repo)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pubgate error:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn unknown_format_is_rejected() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    pubgate_in(&repo)
        .args(["check", "--format", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn rules_prints_resolved_preset() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    pubgate_in(&repo)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("preset: public"))
        .stdout(predicate::str::contains("glob  docs/**/*.md"));
}

/// The binary as a git hook runs it: inside the repository, no `--repo-root`.
#[allow(deprecated)]
fn pubgate_from(dir: &camino::Utf8Path) -> Command {
    let mut cmd = Command::cargo_bin("pubgate").unwrap();
    cmd.current_dir(dir.as_std_path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn current_directory_repository_is_audited_without_repo_root() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("README.md", "# Lift\n")
        .stage("src/private.py", "print(1)\n");

    pubgate_from(repo.root())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("src/private.py"));
}

#[test]
fn nested_directory_resolves_to_enclosing_repository() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("docs/guide/intro.md", "# Intro\n")
        .stage("data/raw/dump.csv", "a,b\n");

    pubgate_from(&repo.root().join("docs/guide"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("data/raw/dump.csv"));
}

#[test]
fn committed_leak_is_caught_after_working_copy_cleanup() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    repo.stage("README.md", "model in src/lift.py\n").commit("initial");
    repo.write("README.md", "clean\n");

    pubgate_in(&repo)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("README.md:1"))
        .stdout(predicate::str::contains("content references private path src/"));
}

#[test]
fn rules_warns_when_mode_has_no_rules() {
    if !git_available() {
        return;
    }
    let repo = TempRepo::init();
    pubgate_in(&repo)
        .args(["--mode", "denylist", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: denylist mode has no deny rules"));
}
