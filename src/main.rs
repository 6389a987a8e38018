use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use khmer_norm::config::{EvalConfig, OutputFormat, TokenizerKind};
use khmer_norm::eval::{self, Summary};
use khmer_norm::khmer_normalize;
use khmer_norm::tokenizer::build_tokenizer;

#[derive(Parser)]
#[command(name = "khmer-norm")]
#[command(about = "Normalize Khmer text and score OCR output with CER/WER")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form of TEXT
    Normalize {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Normalize TEXT and print its tokens
    Tokenize {
        /// Word list for dictionary segmentation (syllables otherwise)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Token separator
        #[arg(short, long, default_value = " | ")]
        separator: String,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Compute CER and WER for every row of a CSV file
    Eval {
        /// Input CSV with ground truth and OCR columns
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "output_wer_cer.csv")]
        output: PathBuf,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Word list for dictionary segmentation
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Worker threads
        #[arg(short, long)]
        threads: Option<usize>,

        /// Only evaluate the first N rows
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Score raw text without normalizing it
        #[arg(long)]
        no_norm: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { text } => {
            println!("{}", khmer_normalize(&text.join(" ")));
        }
        Commands::Tokenize { dict, separator, text } => {
            let mut config = EvalConfig::default();
            if let Some(path) = dict {
                config.tokenizer = TokenizerKind::Dictionary;
                config.dictionary_path = Some(path);
            }
            let tokenizer = build_tokenizer(&config).context("failed to build tokenizer")?;
            let tokens = tokenizer.tokenize(&khmer_normalize(&text.join(" ")));
            println!("{}", tokens.join(&separator));
        }
        Commands::Eval { input, output, config, dict, threads, limit, format, no_norm } => {
            let mut config = match config {
                Some(path) => EvalConfig::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => EvalConfig::default(),
            };
            if let Some(path) = dict {
                config.tokenizer = TokenizerKind::Dictionary;
                config.dictionary_path = Some(path);
            }
            if let Some(n) = threads {
                config.threads = n;
            }
            if limit.is_some() {
                config.limit = limit;
            }
            if let Some(f) = format {
                config.output_format = f;
            }
            if no_norm {
                config.enable_normalization = false;
            }
            config.validate()?;
            log::debug!("Config: {:?}", config);

            let tokenizer = build_tokenizer(&config).context("failed to build tokenizer")?;
            let records = eval::read_records_from_path(&input, &config)
                .with_context(|| format!("failed to read {}", input.display()))?;

            let start = Instant::now();
            let results = eval::evaluate_batch(&records, tokenizer.as_ref(), &config)?;
            log::info!(
                "Evaluated {} records in {:.3}s on {} threads",
                results.len(),
                start.elapsed().as_secs_f64(),
                config.threads
            );

            eval::write_results_to_path(&output, &results, config.output_format)
                .with_context(|| format!("failed to write {}", output.display()))?;

            println!("{}", Summary::from_results(&results));
            println!("WER & CER results saved to {}", output.display());
        }
    }

    Ok(())
}
