
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::phonemes::Phoneme;

// Case-insensitive substring lookup over an emitted vocabulary; hits come
// back in key order.
pub fn search_vocabulary<'a>(vocabulary: &'a BTreeMap<String, Vec<Phoneme>>, query: &str) -> Vec<(&'a str, &'a [Phoneme])> {
  let query = query.to_lowercase();

  vocabulary.iter()
    .filter(|(word, _)| word.to_lowercase().contains(&query))
    .map(|(word, phonemes)| (word.as_str(), phonemes.as_slice()))
    .collect()
}

pub fn spell_out(phonemes: &[Phoneme]) -> String {
  phonemes.iter().map(|p| p.spelled()).join("")
}
