use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search_core::{index_catalog, Book, EngineConfig, SearchEngine, StopWords, DEFAULT_MAX_RESULTS};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const NO_RESULTS_MESSAGE: &str = "Sorry, no results.";

#[derive(Parser)]
#[command(name = "booksearch")]
#[command(about = "Search a book catalog ranked by TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CatalogArgs {
    /// Tab-separated catalog: id, title, author
    #[arg(short, long, default_value = "data/title_author.tab.txt")]
    data: PathBuf,
    /// Stop-word file, one word per line (built-in English list otherwise)
    #[arg(long)]
    stop_words: Option<PathBuf>,
    /// Maximum number of results per query
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    results: usize,
    /// IDF smoothing constant
    #[arg(long, default_value_t = 1)]
    smoothing: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Read queries from stdin until an empty line
    Shell {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Run a single query and exit
    Query {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Query terms; every term must match
        #[arg(long)]
        q: String,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Shell { catalog } => {
            let engine = open(&catalog)?;
            shell(&engine, catalog.results)
        }
        Commands::Query { catalog, q } => {
            let engine = open(&catalog)?;
            let mut out = io::stdout().lock();
            print_results(&mut out, &engine, &q, catalog.results)?;
            Ok(())
        }
    }
}

fn open(args: &CatalogArgs) -> Result<SearchEngine<Book>> {
    let stop_words = match &args.stop_words {
        Some(path) => StopWords::load(path)?,
        None => StopWords::english(),
    };
    tracing::info!("loading books");
    let engine = index_catalog(&args.data, stop_words, EngineConfig { smoothing: args.smoothing })?;
    tracing::info!(num_docs = engine.count(), "done loading books");
    Ok(engine)
}

fn shell(engine: &SearchEngine<Book>, max_results: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut line = String::new();
    loop {
        write!(out, "Enter a query, or hit enter to quit: ")?;
        out.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        let query = line.trim();
        if query.is_empty() { break; }
        print_results(&mut out, engine, query, max_results)?;
    }
    Ok(())
}

fn print_results<W: Write>(out: &mut W, engine: &SearchEngine<Book>, query: &str, max_results: usize) -> io::Result<()> {
    let results = engine.search(query, max_results);
    if results.is_empty() {
        return writeln!(out, "{NO_RESULTS_MESSAGE}");
    }
    for r in results {
        writeln!(out, "score: {:.6}, {}", r.score, r.document)?;
    }
    Ok(())
}
