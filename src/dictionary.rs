
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};

use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::errors::{Result, VocabError};
use crate::matching::SourceWord;

lazy_static! {
  static ref DIGIT_STRIPPING_RE: Regex = Regex::new(r"\d+").unwrap();
}

// "word frequency" lines; words are uppercased, first occurrence wins.
pub fn load_frequencies(path: &str) -> Result<Vec<(String, f64)>> {
  let mut frequencies = vec![];
  let mut seen = HashSet::new();

  for line in BufReader::new(File::open(path)?).lines() {
    let line = line?;
    let mut tokens = line.split_whitespace();

    let word = match tokens.next() {
      Some(word) => word.to_uppercase(),
      None => continue
    };
    let frequency: f64 = match tokens.next() {
      Some(text) => text.parse().map_err(|_| VocabError::BadFrequency(line.clone()))?,
      None => return Err(VocabError::BadFrequency(line.clone()))
    };
    if frequency < 0.0 {
      return Err(VocabError::BadFrequency(line.clone()));
    }

    if seen.insert(word.clone()) {
      frequencies.push((word, frequency));
    }
  }

  Ok(frequencies)
}

// One or more words per line; order preserved, duplicates dropped.
pub fn load_word_list(path: &str) -> Result<Vec<String>> {
  let mut words = vec![];
  let mut seen = HashSet::new();

  for line in BufReader::new(File::open(path)?).lines() {
    let line = line?;
    for token in line.split_whitespace() {
      let word = token.to_uppercase();
      if seen.insert(word.clone()) {
        words.push(word);
      }
    }
  }

  Ok(words)
}

// cmudict format: ";;;" comment lines, "WORD(2)" alternate entries (skipped,
// the base entry stands), stress digits on the symbols.
pub fn load_pronunciations(path: &str) -> Result<HashMap<String, Vec<String>>> {
  let mut pronunciations = HashMap::new();

  for line in BufReader::new(File::open(path)?).lines() {
    let line = line?;
    if line.starts_with(";;;") || line.trim().is_empty() {
      continue;
    }

    let mut tokens = line.split_whitespace();
    let word = match tokens.next() {
      Some(word) => word,
      None => continue
    };
    if word.contains('(') {
      continue;
    }

    let symbols: Vec<String> = tokens
      .map(|t| DIGIT_STRIPPING_RE.replace_all(t, "").into_owned())
      .collect();
    if symbols.is_empty() {
      continue;
    }

    pronunciations.insert(word.to_uppercase(), symbols);
  }

  Ok(pronunciations)
}

// Source words in deterministic order: word-list order when a list is given,
// frequency-file order otherwise. Unlisted frequencies default to 0.0; a
// missing pronunciation stays None and is skipped by the matcher.
pub fn assemble_source_words(
  frequencies: Vec<(String, f64)>,
  word_list: Option<Vec<String>>,
  mut pronunciations: HashMap<String, Vec<String>>
) -> Vec<SourceWord> {
  let ordered: Vec<(String, f64)> = match word_list {
    Some(words) => {
      let frequency_table: HashMap<String, f64> = frequencies.into_iter().collect();
      words.into_iter()
        .map(|word| {
          let frequency = frequency_table.get(&word).copied().unwrap_or(0.0);
          (word, frequency)
        })
        .collect()
    },
    None => frequencies
  };

  ordered.into_iter()
    .map(|(word, frequency)| {
      let arpabet = pronunciations.remove(&word);
      SourceWord { word, frequency, arpabet }
    })
    .collect()
}

pub fn load_source_words(frequency_path: &str, word_list_path: Option<&str>, dictionary_path: &str) -> Result<Vec<SourceWord>> {
  let frequencies = load_frequencies(frequency_path)?;
  let word_list = match word_list_path {
    Some(path) => Some(load_word_list(path)?),
    None => None
  };
  let pronunciations = load_pronunciations(dictionary_path)?;

  let source_words = assemble_source_words(frequencies, word_list, pronunciations);
  info!("Loaded {} source words, {} with pronunciations",
    source_words.len(),
    source_words.iter().filter(|w| w.arpabet.is_some()).count());
  Ok(source_words)
}
