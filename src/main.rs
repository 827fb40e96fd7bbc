use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use flag_quiz::{CountrySource, FlagQuiz, JsonFileSource, Language, QuizConfig, RestCountriesSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Language for the interface and country names
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Number of flags per quiz
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(1..))]
    questions: Option<u16>,

    /// Country data endpoint (REST Countries v3.1 format)
    #[arg(long)]
    api_url: Option<String>,

    /// Play offline from a saved REST Countries JSON response
    #[arg(short, long, conflicts_with = "api_url")]
    countries: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&PathBuf>) -> std::io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    let mut config = QuizConfig::from_env();
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(questions) = args.questions {
        config.total_questions = usize::from(questions);
    }
    if let Some(url) = args.api_url {
        config.api_url = url;
    }

    let source: Arc<dyn CountrySource> = match args.countries {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(RestCountriesSource::new(config.api_url.clone())),
    };

    if let Err(e) = FlagQuiz::new(config, source).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
