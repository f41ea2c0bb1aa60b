use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::request::{RecommendRequest, ValidatedRequest};
use crate::matching::engine::{MatchResult, MatchingEngine};
use crate::web::server::RecommendResponse;

#[derive(Args)]
pub struct RecommendArgs {
    /// Request file in the same JSON shape as the HTTP endpoint accepts
    /// (`{"user_skills": [...], "teams": [...]}`). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute recommend subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the request
/// fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RecommendArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let request = load_request(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} user skills and {} teams",
            request.user_skills.len(),
            request.teams.len()
        );
    }

    let engine = MatchingEngine::from_request(&request);
    let matches = engine.find_matches(&request.teams);

    if matches.is_empty() && !matches!(format, OutputFormat::Json) {
        eprintln!("No matching teams found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

/// Read, parse and validate a request from a file, or stdin when `path` is `-`
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, or fails
/// request validation.
pub fn load_request(path: &Path) -> anyhow::Result<ValidatedRequest> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let request: RecommendRequest =
        serde_json::from_str(&content).context("Request is not valid JSON")?;

    Ok(request.validate()?)
}

fn print_text_results(matches: &[MatchResult]) {
    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n#{} {} (score {})", i + 1, result.name, result.score);
        println!("   ID: {}", result.id);
        println!("   Description: {}", result.description);
        println!("   Matched: {}", result.matched_skills.join(", "));
        println!("   Required: {}", result.required_skills.join(", "));
    }
}

fn print_json_results(matches: Vec<MatchResult>) -> anyhow::Result<()> {
    let output = RecommendResponse {
        recommendations: matches,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("rank\tid\tname\tscore\tmatched_skills\trequired_skills");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            m.id,
            m.name,
            m.score,
            m.matched_skills.join(","),
            m.required_skills.join(","),
        );
    }
}
