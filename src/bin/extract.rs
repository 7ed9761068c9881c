// Minimal standalone CLI that runs the extraction pipeline over a transcript
// read from a file (or stdin) and prints the resulting action items as JSON.
//
// Configure via environment: GROQ_API_KEY (credential; optional — without it
// the rule-based fallback runs), LLM_ENDPOINT and LLM_MODEL (overrides).

use action_tracker::{ActionItemExtractor, LlmConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Extract structured action items from a meeting transcript")]
struct Args {
    /// Transcript file to read; stdin when omitted
    transcript: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let transcript = match &args.transcript {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = LlmConfig::from_env();
    if config.api_key.is_none() {
        eprintln!("No GROQ_API_KEY set; using rule-based fallback extraction");
    }

    let extractor = ActionItemExtractor::new(config);
    let items = extractor.extract(&transcript).await;

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
