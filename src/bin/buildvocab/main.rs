
use std::process;

use clap::Parser;
use howlong::SteadyTimer;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use conlang_vocab::dictionary::load_source_words;
use conlang_vocab::distances::PhonemeDistances;
use conlang_vocab::errors::Result;
use conlang_vocab::features::FeatureTable;
use conlang_vocab::generation::{sample_pool, Inventory};
use conlang_vocab::matching::Matcher;
use conlang_vocab::output::write_vocabulary;

#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[arg(long, default_value = "res/wordFrequencies.txt")]
  frequencies: String,
  #[arg(long)]
  word_list: Option<String>,
  #[arg(long, default_value = "res/cmudict-0.7b")]
  dictionary: String,
  #[arg(long, default_value = "res/ipaFeatureMapping.json")]
  features: String,
  #[arg(long, default_value = "conlangVocab.json")]
  output: String,
  #[arg(long, default_value_t = 600)]
  vocab_size: usize,
  #[arg(long, default_value_t = 3)]
  max_syllables: usize,
  #[arg(long)]
  candidate_limit: Option<usize>,
  #[arg(long, default_value_t = 0)]
  seed: u64,
}

fn run(args: &Args) -> Result<()> {
  let features = FeatureTable::load(&args.features)?;
  let source_words = load_source_words(&args.frequencies, args.word_list.as_deref(), &args.dictionary)?;

  let timer = SteadyTimer::new();
  let inventory = Inventory::default();
  let mut pool = inventory.generate_pool(args.max_syllables);
  info!("Generated {} candidate words in {}ms", pool.len(), timer.elapsed().as_millis());

  if let Some(limit) = args.candidate_limit {
    let mut rng = SmallRng::seed_from_u64(args.seed);
    sample_pool(&mut pool, limit, &mut rng);
    info!("Sampled pool down to {} candidates", pool.len());
  }

  let timer = SteadyTimer::new();
  let mut matcher = Matcher::new(pool, PhonemeDistances::new(features));
  let vocabulary = matcher.assign(source_words, args.vocab_size)?;
  info!("Matched {} words in {}ms", vocabulary.len(), timer.elapsed().as_millis());

  write_vocabulary(&args.output, &vocabulary)?;
  info!("Wrote {}", args.output);
  Ok(())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let args = Args::parse();

  if let Err(e) = run(&args) {
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}
