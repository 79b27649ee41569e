use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docfixture::document::iso_millis;
use docfixture::storage::load_document;
use docfixture::{Document, DocumentId, FixtureGenerator, FixtureStore, GeneratorConfig, WritePolicy};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes.
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Generate JSON page fixtures for the mock document API.
#[derive(Parser)]
#[command(name = "docfixture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a document fixture and write it to <OUT>/data/data_<ID>.json
    Generate(GenerateArgs),
    /// Print a summary of a saved fixture
    Inspect(InspectArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// Document identifier, e.g. 7-K16813-1026-X
    id: String,

    /// Number of pages to generate
    pages: u32,

    /// Base directory for the data folder
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Seed for reproducible text and timestamps (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log a failed file write instead of exiting with an error
    #[arg(long)]
    log_and_continue: bool,
}

#[derive(Parser)]
struct InspectArgs {
    /// Path to a fixture file
    path: PathBuf,
}

/// Config file (or defaults) with the command-line overrides applied.
fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.log_and_continue {
        config.write_policy = WritePolicy::LogAndContinue;
    }
    Ok(config)
}

async fn run_generate(args: GenerateArgs) -> Result<PathBuf> {
    let config = resolve_config(&args)?;

    let id = DocumentId::parse(&args.id).with_context(|| format!("invalid document id {:?}", args.id))?;
    let store = FixtureStore::with_config(&args.out, &config);
    let mut generator = FixtureGenerator::from_config(config);

    let outcome = store
        .save_document(&mut generator, &id, args.pages)
        .await
        .with_context(|| format!("failed to save fixture for {}", id))?;

    Ok(outcome.path)
}

fn summarize(document: &Document) -> String {
    let mut lines = vec![
        format!("id:          {}", document.id),
        format!("title:       {}", document.title),
        format!("description: {}", document.description),
        format!("updatedAt:   {}", iso_millis::format(&document.updated_at)),
        format!("createdAt:   {}", iso_millis::format(&document.created_at)),
        format!("pages:       {}", document.pages.len()),
    ];
    if let Some(first) = document.pages.first() {
        lines.push(format!("first src:   {}", first.src));
    }
    lines.join("\n")
}

async fn run_inspect(args: InspectArgs) -> Result<String> {
    let document = load_document(&args.path)
        .await
        .with_context(|| format!("failed to read fixture {}", args.path.display()))?;
    Ok(summarize(&document))
}

async fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Generate(args) => Ok(run_generate(args).await?.display().to_string()),
        Commands::Inspect(args) => run_inspect(args).await,
    }
}

fn exit_status(result: &Result<String>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_ERROR,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    docfixture::init_tracing();
    let cli = Cli::parse();

    let result = run(cli).await;
    match &result {
        Ok(output) => println!("{}", output),
        Err(e) => eprintln!("Error: {:#}", e),
    }
    ExitCode::from(exit_status(&result))
}
