use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use urag_core::{load_corpus, sample_corpus};
use urag_engine::{QueryResponse, ResolverConfig, SeededPicker, TieredResolver};

/// Tiered FAQ / document / fallback question answering
#[derive(Parser, Debug)]
#[command(name = "urag")]
#[command(about = "Answer admissions questions from a FAQ and document corpus", long_about = None)]
struct Args {
    /// Corpus JSON file (defaults to the bundled sample corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Resolver config JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for template selection, for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a question and print the response as JSON
    Ask {
        /// The question to answer
        question: String,
    },
    /// Print corpus statistics as JSON
    Stats,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting URAG v{}", env!("CARGO_PKG_VERSION"));

    let corpus = match &args.corpus {
        Some(path) => {
            info!("Corpus: {:?}", path);
            load_corpus(path)?
        }
        None => {
            info!("Corpus: bundled sample");
            sample_corpus()?
        }
    };

    let config = match &args.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };

    let mut builder = TieredResolver::builder(corpus).config(config);
    if let Some(seed) = args.seed {
        builder = builder.picker(Arc::new(SeededPicker::new(seed)));
    }
    let resolver = builder.build()?;

    match args.command {
        Command::Ask { question } => {
            let response = QueryResponse::from(resolver.resolve(&question));
            info!(
                "Resolved as {} with confidence {:.3}",
                response.kind, response.confidence
            );
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&resolver.stats())?);
        }
    }

    Ok(())
}
