use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use treeflat::{Corpus, CorpusError, DEFAULT_MARGIN, Flattener, Node, TreeError};

/// Prints a treebank sentence before and after flattening.
#[derive(Parser, Debug)]
#[command(name = "treeflat", version, about)]
struct Cli {
    /// Bracketed treebank file; the bundled wsj_0001 sample when omitted
    path: Option<PathBuf>,

    /// Index of the sentence to flatten
    #[arg(short, long, default_value_t = 0)]
    sentence: usize,

    /// Width at which printed trees wrap
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    margin: usize,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("Sentence {index} requested, but the corpus has {count}.")]
    NoSuchSentence { index: usize, count: usize },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let corpus = match &cli.path {
        Some(path) => Corpus::from_path(path)?,
        None => Corpus::sample()?,
    };

    let deep = corpus
        .parsed_sents()
        .get(cli.sentence)
        .ok_or(DemoError::NoSuchSentence { index: cli.sentence, count: corpus.len() })?;
    let flat = Flattener::default().flatten(deep)?;

    println!("Deep Tree : \n {}", deep.pformat(cli.margin));
    println!("\n Flattened Tree : \n {}", flat.pformat(cli.margin));

    let pierre = Node::preterminal("NNP", "Pierre");
    let pierre_vinken = Node::internal("NP", vec![pierre.clone(), Node::preterminal("NNP", "Vinken")]);
    println!("\nHeight : {}", pierre.height());
    println!("\nHeight : {}", pierre_vinken.height());

    Ok(())
}
