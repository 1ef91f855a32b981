
use std::cmp::Reverse;
use std::collections::BTreeMap;

use float_ord::FloatOrd;
use log::{debug, info};

use crate::distances::PhonemeDistances;
use crate::errors::Result;
use crate::phonemes::{encode, Phoneme};
use crate::translation::translate_word;

// Bias toward shorter candidate words, per candidate phoneme.
pub const LENGTH_PENALTY: u32 = 10;

pub struct SourceWord {
  pub word: String,
  pub frequency: f64,
  pub arpabet: Option<Vec<String>>
}

pub fn word_loss(distances: &mut PhonemeDistances, word: &[Phoneme], candidate: &[Phoneme]) -> Result<u32> {
  Ok(distances.sequence_distance(word, candidate)? + LENGTH_PENALTY * candidate.len() as u32)
}

pub struct Matcher {
  pool: Vec<Vec<Phoneme>>,
  distances: PhonemeDistances
}

impl Matcher {
  pub fn new(pool: Vec<Vec<Phoneme>>, distances: PhonemeDistances) -> Matcher {
    Matcher { pool, distances }
  }

  pub fn remaining_candidates(&self) -> usize {
    self.pool.len()
  }

  // Greedy assignment: highest-frequency words first, each taking the
  // lowest-loss remaining candidate. Each candidate is consumed at most
  // once; there is no backtracking.
  pub fn assign(&mut self, mut source_words: Vec<SourceWord>, target_size: usize) -> Result<BTreeMap<String, Vec<Phoneme>>> {
    // Stable sort: words with equal frequency (common at the
    // unknown-frequency value 0.0) keep their input order.
    source_words.sort_by_key(|w| Reverse(FloatOrd(w.frequency)));

    let mut vocabulary: BTreeMap<String, Vec<Phoneme>> = BTreeMap::new();
    let mut total_loss = 0.0;

    for source_word in &source_words {
      if vocabulary.len() >= target_size {
        break;
      }

      // no pronunciation entry: the word is out of candidacy, not an error
      let arpabet = match &source_word.arpabet {
        Some(arpabet) => arpabet,
        None => continue
      };
      let word_phonemes = translate_word(arpabet)?;

      let mut best: Option<(u32, usize)> = None;
      for i in 0 .. self.pool.len() {
        let loss = word_loss(&mut self.distances, &word_phonemes, &self.pool[i])?;
        // strict comparison keeps the first of equal-loss candidates
        if best.map_or(true, |(best_loss, _)| loss < best_loss) {
          best = Some((loss, i));
        }
      }

      if let Some((loss, i)) = best {
        let candidate = self.pool.remove(i);
        debug!("{} -> {} (loss {})", source_word.word, encode(&candidate), loss);
        total_loss += source_word.frequency * loss as f64;
        vocabulary.insert(source_word.word.clone(), candidate);
      }
    }

    info!("Assigned {} words, total weighted loss {}", vocabulary.len(), total_loss);
    Ok(vocabulary)
  }
}
