
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use crate::errors::{Result, VocabError};
use crate::phonemes::Phoneme;

// The emitted form maps each word to its ordered IPA symbols. A BTreeMap
// keeps the serialization byte-identical across runs.
pub fn write_vocabulary(path: &str, vocabulary: &BTreeMap<String, Vec<Phoneme>>) -> Result<()> {
  let rendered: BTreeMap<&String, Vec<&'static str>> = vocabulary.iter()
    .map(|(word, phonemes)| (word, phonemes.iter().map(|p| p.ipa()).collect()))
    .collect();

  serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &rendered)?;
  Ok(())
}

pub fn read_vocabulary(path: &str) -> Result<BTreeMap<String, Vec<Phoneme>>> {
  let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(File::open(path)?))?;

  let mut vocabulary = BTreeMap::new();
  for (word, symbols) in raw {
    let mut phonemes = vec![];
    for symbol in &symbols {
      match Phoneme::from_ipa(symbol) {
        Some(p) => phonemes.push(p),
        None => return Err(VocabError::UnknownPhoneme(symbol.clone()))
      }
    }
    vocabulary.insert(word, phonemes);
  }

  Ok(vocabulary)
}
