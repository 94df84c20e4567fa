//! `bv` -- beat velocity reporting CLI.
//!
//! Parses CLI arguments with clap, collects the per-beat answers
//! interactively, sums closed story points from a GitHub project column,
//! and prints the derived velocity metrics as a table.

mod cli;
mod output;
mod prompt;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use beatv_core::column::ColumnRef;
use beatv_core::stats::compute_stats;
use beatv_github::{compute_velocity, GithubClient};

use cli::Cli;

fn main() {
    // Exit cleanly on Ctrl+C instead of leaving a half-printed prompt.
    let _ = ctrlc::set_handler(|| {
        std::process::exit(1);
    });

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("bv=debug,beatv_github=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // The token is the one input nothing works without: fail with usage help
    // before prompting or touching the network.
    let Some(token) = cli.token.clone().filter(|token| !token.is_empty()) else {
        eprintln!("Error: missing GitHub API token");
        eprintln!();
        Cli::command().print_help().ok();
        println!();
        std::process::exit(2);
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = run(&cli, &token) {
        // For JSON mode, output error as JSON
        if cli.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, token: &str) -> Result<()> {
    // Repo filter flags are accepted for env/CI compatibility but the
    // velocity computation works off the project column alone.
    debug!(
        owner = ?cli.owner,
        repo = ?cli.repo,
        milestone = ?cli.milestone,
        labels = ?cli.labels,
        issues = ?cli.issues,
        include_points = cli.points,
        "parsed repo filter flags"
    );

    let column: ColumnRef = cli
        .project_column
        .as_deref()
        .context("missing project column URL (--project-column or PROJECT_COLUMN_URL)")?
        .parse()?;

    // An absent beat matches no card labels and reports zero points closed.
    let beat = cli.beat.as_deref().unwrap_or_default();

    let answers = prompt::collect_answers().context("failed to read answers")?;

    let client = GithubClient::new(token);
    let total_points = compute_velocity(&client, &column, beat)
        .with_context(|| format!("failed to compute velocity for {}", column))?;

    let report = compute_stats(total_points, &answers);

    if cli.json {
        output::output_json(&report);
    } else {
        output::print_report(&report);
    }

    Ok(())
}
