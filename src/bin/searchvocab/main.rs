
use std::io;
use std::process;

use clap::Parser;
use console::style;
use dialoguer::Input;
use itertools::Itertools;

use conlang_vocab::errors::Result;
use conlang_vocab::output::read_vocabulary;
use conlang_vocab::search::{search_vocabulary, spell_out};

#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[arg(long, default_value = "conlangVocab.json")]
  vocabulary: String,
}

fn run(args: &Args) -> Result<()> {
  let vocabulary = read_vocabulary(&args.vocabulary)?;
  println!("Loaded {} vocabulary entries", vocabulary.len());

  loop {
    let query: String = Input::new()
      .with_prompt("Word to search (empty to quit)")
      .allow_empty(true)
      .interact_text()
      .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let query = query.trim().to_owned();
    if query.is_empty() {
      break;
    }

    let hits = search_vocabulary(&vocabulary, &query);
    if hits.is_empty() {
      println!("{}", style("No matching words found").dim());
      continue;
    }

    for (word, phonemes) in hits {
      println!("{}  /{}/  {}",
        style(word).bold(),
        phonemes.iter().map(|p| p.ipa()).join(""),
        style(spell_out(phonemes)).green());
    }
  }

  Ok(())
}

fn main() {
  let args = Args::parse();

  if let Err(e) = run(&args) {
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}
