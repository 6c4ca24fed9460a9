use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::error;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rs_markov_core::{DeadEndPolicy, Generator, Prediction, PredictionInput, TransitionModel};

#[derive(Parser)]
#[command(name = "rs-markov")]
#[command(version)]
#[command(about = "Word-level Markov chain sentence generator", long_about = None)]
struct Cli {
    /// Corpus text file used to train the model
    #[arg(short, long)]
    corpus: PathBuf,

    /// First word of the sentence (prompted for if missing)
    #[arg(short, long)]
    word: Option<String>,

    /// Number of words to generate (prompted for if missing)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fail instead of stopping early when a word has no successor
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Prints `label` and reads one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("> {}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let word = match cli.word {
        Some(word) => word,
        None => prompt("Seed word")?,
    };
    let count = match cli.count {
        Some(count) => count,
        None => prompt("Number of words to generate")?.parse::<usize>()?,
    };

    let mut input = PredictionInput::new(&word, count)?;
    if cli.strict {
        input.dead_end = DeadEndPolicy::Fail;
    }

    // Train once, then generate against the immutable model
    let model = TransitionModel::from_file(&cli.corpus)?;

    println!("\nNumber of words: {}", input.count());
    println!("Training corpus: {}", cli.corpus.display());
    println!("Predicted text:\n");

    let mut rng: Box<dyn rand::RngCore> = match cli.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    match Generator::new(&model).predict(&input, &mut *rng)? {
        Prediction::Sentence(sentence) => println!("{}", sentence),
        not_found @ Prediction::WordNotFound => {
            println!("{}", not_found);
            if let Some(hint) = model.random_word(&mut *rng) {
                println!("Try for example: {}", hint);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
