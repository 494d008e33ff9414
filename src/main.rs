use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use tealeaf::analytics;
use tealeaf::config::LdaConfig;
use tealeaf::corpus::document::Document;
use tealeaf::corpus::matrix::DocTermMatrix;
use tealeaf::corpus::tokenize::StopWords;
use tealeaf::lda;
use tealeaf::output::terminal;

/// Tealeaf: topic and sentiment analytics for document corpora.
///
/// Points at a directory of extracted statement text (one .txt per
/// document) and reports latent topics, term frequencies, lexicon-based
/// sentiment, and watch-term trends.
#[derive(Parser)]
#[command(name = "tealeaf", version, about)]
struct Cli {
    /// Directory of .txt documents, read in filename order
    corpus: PathBuf,

    /// Stop-word file (one word per line); defaults to the built-in English list
    #[arg(long, global = true)]
    stop_words: Option<PathBuf>,

    /// Emit JSON instead of formatted terminal output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit an LDA topic model and show the discovered topics
    Topics {
        /// Number of latent topics (at least 2)
        #[arg(long, default_value = "10")]
        topics: usize,

        /// Gibbs sweeps over the corpus
        #[arg(long, default_value = "1000")]
        sweeps: usize,

        /// Dirichlet smoothing on document-topic counts
        #[arg(long, default_value = "0.1")]
        alpha: f64,

        /// Dirichlet smoothing on topic-term counts
        #[arg(long, default_value = "0.1")]
        beta: f64,

        /// PRNG seed; reruns with the same seed reproduce the model exactly
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Top terms to show per topic
        #[arg(long, default_value = "8")]
        top: usize,
    },

    /// Rank terms by corpus-wide frequency
    Frequency {
        /// Number of terms to show
        #[arg(long, default_value = "25")]
        top: usize,
    },

    /// Score per-document signed sentiment against a lexicon
    Sentiment {
        /// JSON lexicon file: {"term": "positive" | "negative", ...}
        #[arg(long)]
        lexicon: PathBuf,
    },

    /// Track watch-term counts over publication dates
    Trends {
        /// Comma-separated watch terms
        #[arg(long, value_delimiter = ',')]
        terms: Vec<String>,

        /// JSON date map: {"doc_id": "YYYY-MM-DD", ...}
        #[arg(long)]
        dates: PathBuf,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tealeaf=info")),
        )
        .init();

    let cli = Cli::parse();

    let stop = load_stop_words(cli.stop_words.as_deref())?;
    let documents = load_documents(&cli.corpus)?;
    let dtm = DocTermMatrix::build(&documents, &stop)
        .with_context(|| format!("building matrix from {}", cli.corpus.display()))?;
    if dtm.dropped > 0 {
        println!(
            "Note: {} document(s) yielded no tokens and were dropped.",
            dtm.dropped
        );
    }

    match cli.command {
        Commands::Topics {
            topics,
            sweeps,
            alpha,
            beta,
            seed,
            top,
        } => {
            let config = LdaConfig {
                topics,
                alpha,
                beta,
                sweeps,
                seed,
            };
            config.validate()?;

            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
            pb.set_message(format!("Sampling ({sweeps} sweeps, k={topics})..."));
            pb.enable_steady_tick(std::time::Duration::from_millis(120));

            let model = lda::fit(&dtm, &config)?;
            pb.finish_and_clear();

            let summaries = model.summaries(top);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                terminal::display_topics(&summaries);
            }
        }

        Commands::Frequency { top } => {
            let ranked = analytics::corpus_frequencies(&dtm);
            if cli.json {
                let shown: Vec<_> = ranked.iter().take(top).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                terminal::display_frequencies(&ranked, top);
            }
        }

        Commands::Sentiment { lexicon } => {
            let lexicon = load_lexicon(&lexicon)?;
            let scores = analytics::score_documents(&dtm, &lexicon);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                terminal::display_sentiment(&scores);
            }
        }

        Commands::Trends { terms, dates } => {
            if terms.is_empty() {
                anyhow::bail!("No watch terms given. Pass --terms inflation,growth");
            }
            let dates = load_dates(&dates)?;
            let series = analytics::watch_term_series(&dtm, &dates, &terms);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                terminal::display_trends(&series);
            }
        }
    }

    Ok(())
}

/// Read every .txt file in the corpus directory, sorted by filename so
/// document (and therefore vocabulary) order is reproducible.
fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading corpus directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        anyhow::bail!("No .txt documents found in {}", dir.display());
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        documents.push(Document::new(id, text));
    }

    info!(documents = documents.len(), "Loaded corpus");
    Ok(documents)
}

/// A user-supplied stop-word file (one word per line, '#' comments allowed),
/// or the built-in English list.
fn load_stop_words(path: Option<&Path>) -> Result<StopWords> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading stop-word file {}", path.display()))?;
            let words: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .collect();
            Ok(StopWords::new(words))
        }
        None => Ok(StopWords::english()),
    }
}

fn load_lexicon(path: &Path) -> Result<analytics::Lexicon> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon {}", path.display()))?;
    let lexicon: analytics::Lexicon = serde_json::from_str(&text)
        .with_context(|| format!("parsing lexicon {}", path.display()))?;
    if lexicon.is_empty() {
        anyhow::bail!("Lexicon {} contains no entries", path.display());
    }
    Ok(lexicon)
}

fn load_dates(path: &Path) -> Result<HashMap<String, NaiveDate>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading date map {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing date map {}", path.display()))
}
