use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use gh_update_checker::{UpdateResult, check_github_update};

#[derive(Parser)]
#[command(name = "gh-update-checker")]
#[command(version, about = "Checks GitHub releases for a newer version")]
struct Cli {
    /// GitHub repository URL or releases API URL
    repo_url: String,

    /// Local version to compare against the latest release
    local_version: String,
}

fn print_usage() {
    eprintln!("Usage: gh-update-checker <repo-url-or-api-url> <local-version>");
    eprintln!("Example:");
    eprintln!(
        "  gh-update-checker https://api.github.com/repos/nlohmann/json/releases/latest 3.11.2"
    );
}

fn render_report(local_version: &str, result: &UpdateResult) -> String {
    format!(
        "Local version:  {}\nRemote version: {}\nUpdate:         {}\n",
        local_version,
        result.latest_version,
        if result.has_update { "YES" } else { "NO" }
    )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            print_usage();
            return ExitCode::from(1);
        }
    };

    match check_github_update(&cli.repo_url, &cli.local_version) {
        Ok(result) => {
            print!("{}", render_report(&cli.local_version, &result));
            if result.has_update {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(3)
        }
    }
}
