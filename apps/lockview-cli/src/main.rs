//! Headless driver for the shell's startup path.
//!
//! Loads (or creates) the configuration next to the executable, applies the
//! command-line gate, and prints what the browser window would open with.

mod report;

use anyhow::Context;
use clap::Parser;
use lockview_actions::{ActionGate, BrowserAction};
use lockview_core::{logging, startup, CoreError, StartupPlan};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "lockview", version, about = "Feature-gated kiosk browser shell")]
struct Cli {
    /// Config file. Defaults to the executable path with a `.config` extension.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report whether URL is allowed by the configured rules. Repeatable.
    #[arg(long = "check", value_name = "URL")]
    check: Vec<String>,

    /// List every browser action with its allowed/denied state.
    #[arg(long)]
    actions: bool,

    /// URL to open instead of the home page.
    url: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::log_error("startup", err.as_ref());
            eprintln!("lockview: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

/// A feature denial exits with 2 so wrappers can tell it from other failures.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Denied(_)) => 2,
        _ => 1,
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => startup::default_config_path()?,
    };
    let cfg = startup::load_or_create(&path)
        .with_context(|| format!("loading config {}", path.display()))?;
    logging::init_logging_for(&cfg);
    tracing::debug!(path = %path.display(), "config ready");

    let plan = startup::plan(&cfg, cli.url.as_deref())?;
    print_plan(&plan);

    for url in &cli.check {
        let verdict = if plan.policy.permits(url) { "allow" } else { "deny" };
        println!("{verdict}\t{url}");
    }

    if cli.actions {
        let gate = ActionGate::with_policy(&cfg, plan.policy.clone());
        for action in BrowserAction::ALL {
            match gate.check(action) {
                Ok(()) => println!("{action:?}\tallowed"),
                Err(denied) => println!("{action:?}\t{}", denied.message()),
            }
        }
    }
    Ok(())
}

fn print_plan(plan: &StartupPlan) {
    println!("title\t{}", plan.title);
    println!("start\t{}", plan.start_url);
    match &plan.icon {
        Some(icon) => println!("icon\t{}", icon.display()),
        None => println!("icon\t-"),
    }
    let features: Vec<&str> = plan.features.iter().map(|f| f.as_str()).collect();
    println!("features\t{}", features.join(","));
    if plan.policy.is_empty() {
        println!("rules\tnone");
    } else {
        println!("rules\t{}", plan.policy.len());
    }
}
