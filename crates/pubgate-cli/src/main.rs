//! CLI entry point for pubgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pubgate-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pubgate_app::{
    AuditRequest, ExplainOutput, HookOutcome, OutputFormat, describe_rules, exit_code,
    format_explanation, format_not_found, install_hook, render_report, resolve_rules, run_audit,
    run_explain, write_report,
};
use pubgate_repo::{GitPathSource, locate_repo_root};
use pubgate_settings::Overrides;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "pubgate",
    version,
    about = "Allowlist-based publish-safety gate for public git repositories"
)]
struct Cli {
    /// Repository root. Defaults to the repository containing this executable,
    /// then the one containing the current directory.
    #[arg(long, global = true)]
    repo_root: Option<Utf8PathBuf>,

    /// Path to pubgate config TOML, relative to the repository root.
    #[arg(long, global = true, default_value = "pubgate.toml")]
    config: Utf8PathBuf,

    /// Override preset (public|patterns|empty).
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Override mode (allowlist|denylist|combined).
    #[arg(long, global = true)]
    mode: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit tracked and staged paths (the default command).
    Check {
        /// Output format on stdout (text|markdown|json|github).
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the JSON report to this file.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Explain a check id or code with remediation guidance.
    Explain {
        /// The check id (e.g. "publish.allowlist") or code (e.g. "not_in_allowlist").
        identifier: String,
    },

    /// Install a git pre-push hook that runs `pubgate check`.
    InstallHook {
        /// Replace an existing hook that was not written by pubgate.
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved rule set.
    Rules,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.cmd {
        None => cmd_check(&cli, "text", None),
        Some(Commands::Check { format, report_out }) => {
            cmd_check(&cli, format, report_out.as_deref())
        }
        Some(Commands::Explain { identifier }) => Ok(cmd_explain(identifier)),
        Some(Commands::InstallHook { force }) => cmd_install_hook(&cli, *force),
        Some(Commands::Rules) => cmd_rules(&cli),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pubgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Locate the repository root and make it the working directory.
fn enter_repo_root(cli: &Cli) -> anyhow::Result<Utf8PathBuf> {
    let root = locate_repo_root(cli.repo_root.as_deref())?;
    std::env::set_current_dir(&root).with_context(|| format!("change directory to {root}"))?;
    debug!(%root, "repository root");
    Ok(root)
}

/// Missing config file means preset defaults.
fn read_config(root: &Utf8Path, config: &Utf8Path) -> anyhow::Result<String> {
    let path = root.join(config);
    if !path.exists() {
        debug!(%path, "no config file; using preset defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(&path).with_context(|| format!("read config: {path}"))
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        preset: cli.preset.clone(),
        mode: cli.mode.clone(),
    }
}

fn cmd_check(cli: &Cli, format: &str, report_out: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let format = OutputFormat::parse(format).with_context(|| {
        format!("unknown format: {format} (expected text, markdown, json, or github)")
    })?;
    let root = enter_repo_root(cli)?;
    let config_text = read_config(&root, &cli.config)?;
    let source = GitPathSource::new(root.clone());

    let output = run_audit(AuditRequest {
        repo_root: &root,
        config_text: &config_text,
        overrides: overrides(cli),
        source: &source,
    })?;

    print!("{}", render_report(&output.report, format)?);
    if let Some(path) = report_out {
        write_report(path, &output.report).context("write report json")?;
    }

    Ok(exit_code(&output.report))
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            1
        }
    }
}

fn cmd_install_hook(cli: &Cli, force: bool) -> anyhow::Result<i32> {
    let root = enter_repo_root(cli)?;
    let program = std::env::current_exe()
        .ok()
        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
        .map(|p| p.to_string())
        .unwrap_or_else(|| "pubgate".to_string());

    match install_hook(&root, &program, force)? {
        HookOutcome::Installed(path) => println!("pubgate: installed pre-push hook at {path}"),
        HookOutcome::Replaced(path) => println!("pubgate: replaced pre-push hook at {path}"),
    }
    Ok(0)
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<i32> {
    let root = enter_repo_root(cli)?;
    let config_text = read_config(&root, &cli.config)?;
    let resolved = resolve_rules(&config_text, overrides(cli))?;
    print!("{}", describe_rules(&resolved.effective));
    for warning in &resolved.warnings {
        println!("\nwarning: {warning}");
    }
    Ok(0)
}
