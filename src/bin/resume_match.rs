use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use resume_matcher::logging::init_tracing_subscriber;
use resume_matcher::{ParsedResume, RequirementOverrides, ResumeScorer, ScoringWeights};

#[derive(Debug, Parser)]
#[command(
    name = "resume-match",
    about = "Score a parsed resume against a job description"
)]
struct Cli {
    /// Parsed resume as JSON (output of an external resume parser)
    #[arg(long)]
    resume: PathBuf,

    /// Job description as plain text
    #[arg(long)]
    job: PathBuf,

    /// Optional scoring weights as JSON; defaults to the built-in weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Override the minimum experience years inferred from the job text
    #[arg(long)]
    min_experience: Option<f64>,

    /// Override the education requirement inferred from the job text
    #[arg(long)]
    education: Option<String>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing_subscriber("resume-match");
    let cli = Cli::parse();

    let resume: ParsedResume = serde_json::from_str(&fs::read_to_string(&cli.resume)?)?;
    let job_description = fs::read_to_string(&cli.job)?;

    let weights = match &cli.weights {
        Some(path) => serde_json::from_str::<ScoringWeights>(&fs::read_to_string(path)?)?,
        None => ScoringWeights::default(),
    };

    let overrides = RequirementOverrides {
        min_experience_years: cli.min_experience,
        education_requirement: cli.education.clone(),
    };

    let scorer = ResumeScorer::new(weights);
    let result =
        scorer.calculate_match_score_with_requirements(&resume, &job_description, &overrides);

    info!(
        overall = result.overall_score,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        "analysis complete"
    );

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");

    Ok(())
}
