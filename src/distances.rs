
use std::collections::HashMap;

use crate::errors::Result;
use crate::features::FeatureTable;
use crate::phonemes::Phoneme;

// Owns the feature table and the memo cache for one matching run.
pub struct PhonemeDistances {
  features: FeatureTable,
  cache: HashMap<(Phoneme, Phoneme), u32>
}

impl PhonemeDistances {
  pub fn new(features: FeatureTable) -> PhonemeDistances {
    PhonemeDistances { features, cache: HashMap::new() }
  }

  // None is the empty phoneme, pricing a pure insertion or deletion at 1.
  // For a real pair the distance counts the features of p1 whose value
  // differs in p2; a feature p2 does not list is never counted. That rule is
  // the observed behavior of the metric and is kept as-is.
  pub fn phoneme_distance(&mut self, p1: Option<Phoneme>, p2: Option<Phoneme>) -> Result<u32> {
    let (p1, p2) = match (p1, p2) {
      (Some(p1), Some(p2)) => (p1, p2),
      _ => return Ok(1)
    };

    if let Some(&distance) = self.cache.get(&(p1, p2)) {
      return Ok(distance);
    }

    let features1 = self.features.features(p1)?;
    let features2 = self.features.features(p2)?;

    let mut distance = 0;
    for (name, value) in features1 {
      if let Some(other) = features2.get(name) {
        if other != value {
          distance += 1;
        }
      }
    }

    self.cache.insert((p1, p2), distance);
    Ok(distance)
  }

  // Weighted edit distance over phoneme sequences, two rolling rows. The row
  // seeds multiply the one-sided cost by the index, which equals the running
  // sum because the one-sided cost is the constant 1.
  pub fn sequence_distance(&mut self, a: &[Phoneme], b: &[Phoneme]) -> Result<u32> {
    let m = a.len();
    let n = b.len();

    let mut v0 = vec![0u32; n + 1];
    let mut v1 = vec![0u32; n + 1];

    for j in 1 ..= n {
      v0[j] = (j as u32) * self.phoneme_distance(None, Some(b[j - 1]))?;
    }

    for i in 0 .. m {
      v1[0] = ((i + 1) as u32) * self.phoneme_distance(None, Some(a[i]))?;

      for j in 0 .. n {
        let deletion = v0[j + 1] + self.phoneme_distance(None, Some(a[i]))?;
        let insertion = v1[j] + self.phoneme_distance(None, Some(b[j]))?;
        let substitution = v0[j] + {
          if a[i] == b[j] { 0 } else { self.phoneme_distance(Some(a[i]), Some(b[j]))? }
        };

        v1[j + 1] = deletion.min(insertion).min(substitution);
      }

      std::mem::swap(&mut v0, &mut v1);
    }

    Ok(v0[n])
  }

  pub fn cache_len(&self) -> usize {
    self.cache.len()
  }
}
