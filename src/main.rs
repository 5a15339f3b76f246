use anyhow::Result;
use clap::Parser;
use regex::Regex;

use git_next_version::analyzer;
use git_next_version::config;
use git_next_version::domain::{is_valid_version_prefix, CommitClassifier, PathFilter};
use git_next_version::git::Git2Repository;
use git_next_version::target::{self, OutputTarget};
use git_next_version::ui;
use git_next_version::versioning;

#[derive(clap::Parser)]
#[command(
    name = "git-next-version",
    version,
    about = "Get the next version according to semantic versioning"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Path to the repository")]
    repository: String,

    #[arg(short, long, help = "Output target: version, json or github-action")]
    target: Option<String>,

    #[arg(short, long, help = "Textual prefix for the emitted version")]
    prefix: Option<String>,

    #[arg(long, help = "Custom feature prefixes (comma-separated)")]
    feature_prefixes: Option<String>,

    #[arg(long, help = "Custom fix prefixes (comma-separated)")]
    fix_prefixes: Option<String>,

    #[arg(long, help = "Custom chore prefixes (comma-separated)")]
    chore_prefixes: Option<String>,

    #[arg(short = 'f', long, help = "Regex to filter tags by name")]
    tags_filter_regex: Option<String>,

    #[arg(
        short = 'c',
        long,
        help = "Regex to filter commits by touched path; prefix with '!' to exclude"
    )]
    commits_filter_path_regex: Option<String>,

    #[arg(long, help = "Regex extracting the version from a tag name (first capture group)")]
    version_regex: Option<String>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn parse_comma_separated_prefixes(input: &str) -> Option<Vec<String>> {
    let prefixes: Vec<String> = input
        .split(',')
        .map(|prefix| prefix.trim().to_string())
        .filter(|prefix| !prefix.is_empty())
        .collect();

    if prefixes.is_empty() {
        None
    } else {
        Some(prefixes)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("could not load config: {}", e));
            std::process::exit(1);
        }
    };

    let prefix = args.prefix.unwrap_or(config.output.prefix);
    if !is_valid_version_prefix(&prefix) {
        ui::display_error(&format!("invalid version prefix {:?}", prefix));
        std::process::exit(1);
    }

    let target_name = args.target.unwrap_or(config.output.target);
    let target = match OutputTarget::parse(&target_name) {
        Ok(target) => target,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let classifier = CommitClassifier::with_prefixes(
        args.chore_prefixes
            .as_deref()
            .and_then(parse_comma_separated_prefixes)
            .or(config.conventional_commits.chore_prefixes),
        args.fix_prefixes
            .as_deref()
            .and_then(parse_comma_separated_prefixes)
            .or(config.conventional_commits.fix_prefixes),
        args.feature_prefixes
            .as_deref()
            .and_then(parse_comma_separated_prefixes)
            .or(config.conventional_commits.feature_prefixes),
    );

    let tags_filter = match args.tags_filter_regex.as_deref().map(Regex::new).transpose() {
        Ok(regex) => regex,
        Err(e) => {
            ui::display_error(&format!("invalid tags filter regex: {}", e));
            std::process::exit(1);
        }
    };

    let version_pattern = match args.version_regex.as_deref().map(Regex::new).transpose() {
        Ok(regex) => regex,
        Err(e) => {
            ui::display_error(&format!("invalid version regex: {}", e));
            std::process::exit(1);
        }
    };

    let path_filter = match args
        .commits_filter_path_regex
        .as_deref()
        .map(PathFilter::parse)
        .transpose()
    {
        Ok(filter) => filter,
        Err(e) => {
            ui::display_error(&format!("invalid commit path filter: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(&args.repository) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("could not open repository: {}", e));
            std::process::exit(1);
        }
    };

    let result = match analyzer::severities_since_last_release(
        &repo,
        &classifier,
        path_filter.as_ref(),
        tags_filter.as_ref(),
        version_pattern.as_ref(),
    ) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let (next_version, has_next_version) =
        versioning::calculate_next_version(&result.previous_version, &result.severities);

    if let Err(e) = target::write_output(&next_version, has_next_version, target, &prefix) {
        ui::display_error(&format!("could not write output: {}", e));
        std::process::exit(1);
    }

    Ok(())
}
