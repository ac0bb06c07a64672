//! CLI binary for resume-extract.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig` and prints the extraction result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use resume_extract::{extract, inspect, ExtractionConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Parse a resume, print JSON to stdout
  resume2json resume.pdf

  # Write JSON to a file
  resume2json resume.pdf -o parsed.json

  # Force the deterministic heuristics even when GEMINI_API_KEY is set
  resume2json --no-model resume.pdf

  # Metadata only (pages, title, author), no extraction
  resume2json --inspect resume.pdf

ENVIRONMENT:
  GEMINI_API_KEY   Enables the model-assisted path when set.
  RUST_LOG         Log filter, e.g. RUST_LOG=resume_extract=debug"#;

#[derive(Parser, Debug)]
#[command(
    name = "resume2json",
    version,
    about = "Extract structured skills, experience, and projects from a resume PDF",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Path to the resume PDF.
    input: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip the model-assisted path; run only the deterministic heuristics.
    #[arg(long)]
    no_model: bool,

    /// Model identifier for the model-assisted path.
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Password for encrypted PDFs.
    #[arg(long, value_name = "PASSWORD")]
    password: Option<String>,

    /// Include the full extracted text in the JSON output.
    #[arg(long)]
    include_raw_text: bool,

    /// Print document metadata only; no extraction, no model call.
    #[arg(long)]
    inspect: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.inspect {
        let meta = inspect(&cli.input).await?;
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    let mut builder = ExtractionConfig::builder().skip_model(cli.no_model);
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    if let Some(password) = &cli.password {
        builder = builder.password(password);
    }
    let config = builder.build()?;

    let result = extract(&cli.input, &config).await?;

    // The full text is bulky and rarely wanted in terminal output.
    let mut json = serde_json::to_value(&result)?;
    if !cli.include_raw_text {
        if let Some(obj) = json.as_object_mut() {
            obj.remove("raw_text");
        }
    }
    let rendered = serde_json::to_string_pretty(&json)?;

    match &cli.output {
        Some(path) => {
            write_atomic(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    eprintln!(
        "pages: {}  skills: {}  experience: {}  projects: {}",
        result.metadata.page_count,
        result.skills.len(),
        result.experience.len(),
        result.projects.len()
    );

    Ok(())
}

/// Atomic write: temp file in the same directory, then rename.
fn write_atomic(path: &PathBuf, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(contents.as_bytes())?;
        f.write_all(b"\n")?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
