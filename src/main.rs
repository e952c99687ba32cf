use anyhow::Result;
use clap::Parser;

use tagcheck::engine::ValidationEngine;
use tagcheck::github::{client::DEFAULT_API_URL, GithubClient, PullRequestSource};
use tagcheck::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "tagcheck",
    about = "Check commit-message tags and version bumps for a pull request"
)]
struct Args {
    #[arg(long, env = "TRAVIS_REPO_SLUG", help = "Repository slug (owner/repo)")]
    repo_slug: Option<String>,

    #[arg(
        long,
        env = "TRAVIS_PULL_REQUEST",
        help = "Pull request number ('false' outside PR builds)"
    )]
    pull_request: Option<String>,

    #[arg(long, env = "TRAVIS_BRANCH", help = "Branch the pull request targets")]
    branch: Option<String>,

    #[arg(long, env = "VERSION", help = "Version the pull request is expected to release")]
    target_version: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub API token")]
    token: Option<String>,

    #[arg(long, default_value = DEFAULT_API_URL, help = "GitHub API base URL")]
    api_url: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Non-PR builds (push builds, crons) have nothing to check.
    let pull_request = match args.pull_request.as_deref() {
        None | Some("") | Some("false") => {
            ui::display_status("Not a pull request build, nothing to check");
            return Ok(());
        }
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                ui::display_error(&format!("Invalid pull request number: '{}'", raw));
                std::process::exit(2);
            }
        },
    };

    let repo_slug = match args.repo_slug {
        Some(slug) => slug,
        None => {
            ui::display_error("Missing repository slug (--repo-slug or TRAVIS_REPO_SLUG)");
            std::process::exit(2);
        }
    };
    let branch = match args.branch {
        Some(branch) => branch,
        None => {
            ui::display_error("Missing target branch (--branch or TRAVIS_BRANCH)");
            std::process::exit(2);
        }
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(2);
        }
    };

    ui::display_status(&format!(
        "Checking commits of {}#{} targeting '{}'",
        repo_slug, pull_request, branch
    ));

    let source = match GithubClient::new(
        &args.api_url,
        &repo_slug,
        pull_request,
        args.token,
        vec![config.files.changelog.clone()],
    ) {
        Ok(client) => client,
        Err(e) => {
            ui::display_error(&format!("Could not build API client: {}", e));
            std::process::exit(2);
        }
    };

    let commits = match source.pull_request_commits() {
        Ok(commits) => commits,
        Err(e) => {
            ui::display_error(&format!("Failed to fetch pull request commits: {}", e));
            std::process::exit(2);
        }
    };
    ui::display_status(&format!("Fetched {} commit(s)", commits.len()));

    let engine = ValidationEngine::new(config);
    let report = match engine.validate(&branch, args.target_version.as_deref(), &commits) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&format!("Validation aborted: {}", e));
            std::process::exit(2);
        }
    };

    ui::display_report(&report);
    if !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
