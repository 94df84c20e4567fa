//! Clap CLI definitions for the `bv` command.
//!
//! Every flag has an environment-variable fallback so the tool can run
//! non-interactively configured from CI or a shell profile.

use clap::Parser;

/// bv -- beat velocity reporting for GitHub project boards.
///
/// Sums story points closed for the current beat from a project column and
/// combines them with interactively collected inputs into a velocity table.
#[derive(Parser, Debug)]
#[command(
    name = "bv",
    about = "Beat velocity reporting for GitHub project boards",
    version
)]
pub struct Cli {
    /// Your GitHub API token.
    #[arg(short = 't', long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The GitHub repo owner - username or org name.
    #[arg(short = 'o', long, env = "REPO_OWNER")]
    pub owner: Option<String>,

    /// The GitHub repo name.
    #[arg(short = 'r', long, env = "REPO_NAME")]
    pub repo: Option<String>,

    /// Repo milestone number filter (from the GitHub URL).
    #[arg(short = 'm', long, env = "REPO_MILESTONE")]
    pub milestone: Option<String>,

    /// Comma-separated list of labels to filter on.
    #[arg(short = 'l', long, env = "REPO_LABELS")]
    pub labels: Option<String>,

    /// Comma-separated list of issue numbers to include.
    #[arg(short = 'i', long, env = "REPO_ISSUES")]
    pub issues: Option<String>,

    /// Include the points labels on cards.
    #[arg(short = 'p', long, env = "INCLUDE_POINTS_LABELS")]
    pub points: bool,

    /// The beat label to match against card labels (e.g. "Beat 3").
    #[arg(short = 'b', long, env = "BEAT")]
    pub beat: Option<String>,

    /// URL of the GitHub project column to report on
    /// (e.g. https://github.com/orgs/acme/projects/25#column-6312145).
    #[arg(long, env = "PROJECT_COLUMN_URL")]
    pub project_column: Option<String>,

    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "bv",
            "--token",
            "tok",
            "--beat",
            "Beat 3",
            "--project-column",
            "https://example.test/p/1#column-42",
            "--points",
            "--json",
        ]);
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.beat.as_deref(), Some("Beat 3"));
        assert!(cli.points);
        assert!(cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn short_flags_match_long_flags() {
        let cli = Cli::parse_from(["bv", "-t", "tok", "-o", "acme", "-r", "app", "-b", "Beat 1"]);
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.owner.as_deref(), Some("acme"));
        assert_eq!(cli.repo.as_deref(), Some("app"));
        assert_eq!(cli.beat.as_deref(), Some("Beat 1"));
    }
}
