
use std::fmt;

use serde::{Serialize, Deserialize};

// The working phonetic alphabet: every sound the ARPAbet translation can
// produce, plus the extra generator vowel A ("a").
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phoneme {
  B, Ch, D, Dh, F, G, H, J, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
  A, Ae, Ah, Ai, Aw, Ee, Eh, Ei, Ih, O, Oi, Oo, Ow, U, Uh
}

impl Phoneme {
  pub fn ipa(&self) -> &'static str {
    use Phoneme::*;
    match self {
      B => "b", Ch => "tʃ", D => "d", Dh => "ð", F => "f", G => "ɡ",
      H => "h", J => "dʒ", K => "k", L => "l", M => "m", N => "n",
      Ng => "ŋ", P => "p", R => "ɹ", S => "s", Sh => "ʃ", T => "t",
      Th => "θ", V => "v", W => "w", Y => "j", Z => "z", Zh => "ʒ",
      A => "a", Ae => "æ", Ah => "ɑ", Ai => "aɪ", Aw => "ɔ", Ee => "i",
      Eh => "ɛ", Ei => "eɪ", Ih => "ɪ", O => "oʊ", Oi => "ɔɪ", Oo => "ʊ",
      Ow => "aʊ", U => "u", Uh => "ʌ"
    }
  }

  pub fn from_ipa(text: &str) -> Option<Phoneme> {
    Phoneme::all().into_iter().find(|p| p.ipa() == text)
  }

  // Prefix scan; multi-character symbols are listed before their one-character
  // prefixes so that "aɪ" never tokenizes as "a".
  pub fn from_ipa_prefix(text: &str) -> Option<(Phoneme, &str)> {
    use Phoneme::*;
    for p in [
        Ai, Ow, Ei, O, Oi, Ch, J,
        B, D, Dh, F, G, H, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
        A, Ae, Ah, Aw, Ee, Eh, Ih, Oo, U, Uh]
    {
      match text.strip_prefix(p.ipa()) {
        None => (),
        Some(rest) => return Some((p, rest))
      }
    }
    None
  }

  // Romanized "conlang spelling"; symbols that are already plain letters
  // spell as themselves.
  pub fn spelled(&self) -> &'static str {
    use Phoneme::*;
    match self {
      Ah => "ah",
      Eh => "eh",
      O => "oh",
      Uh => "uh",
      p => p.ipa()
    }
  }

  pub fn is_vowel(&self) -> bool {
    use Phoneme::*;
    match self {
      A | Ae | Ah | Ai | Aw | Ee | Eh | Ei | Ih | O | Oi | Oo | Ow | U | Uh => true,
      _ => false
    }
  }

  pub fn all() -> Vec<Phoneme> {
    use Phoneme::*;
    vec![B, Ch, D, Dh, F, G, H, J, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
      A, Ae, Ah, Ai, Aw, Ee, Eh, Ei, Ih, O, Oi, Oo, Ow, U, Uh]
  }
}

impl fmt::Display for Phoneme {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.ipa())
  }
}

pub fn encode(ps: &[Phoneme]) -> String {
  let mut res = "".to_owned();

  for p in ps {
    res.extend(p.ipa().chars());
  }

  res
}

pub fn decode(text: &str) -> Vec<Phoneme> {
  let mut res = vec![];
  let mut working = text;

  while !working.is_empty() {
    match Phoneme::from_ipa_prefix(working) {
      Some((p, rest)) => {
        res.push(p);
        working = rest;
      },
      None => {
        let skip = working.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        working = &working[skip..];
      }
    }
  }

  res
}

#[cfg(test)]
mod tests {
  use super::*;
  use Phoneme::*;

  #[test]
  fn test_encode_1() {
    assert_eq!(encode(&[]), "".to_owned());
  }

  #[test]
  fn test_encode_2() {
    assert_eq!(encode(&[L, Ah, T, Eh]), "lɑtɛ".to_owned());
  }

  #[test]
  fn test_decode_1() {
    assert_eq!(decode(""), vec![]);
  }

  #[test]
  fn test_decode_2() {
    assert_eq!(decode("lɑtɛ"), vec![L, Ah, T, Eh]);
  }

  #[test]
  fn test_decode_multichar_symbols() {
    assert_eq!(decode("aɪ"), vec![Ai]);
    assert_eq!(decode("aʊ"), vec![Ow]);
    assert_eq!(decode("tʃoʊ"), vec![Ch, O]);
    assert_eq!(decode("dʒa"), vec![J, A]);
  }

  #[test]
  fn test_decode_skips_junk() {
    assert_eq!(decode("l-ɑ"), vec![L, Ah]);
    assert_eq!(decode("ˈlɑ"), vec![L, Ah]);
  }

  #[test]
  fn test_from_ipa() {
    assert_eq!(Phoneme::from_ipa("aʊ"), Some(Ow));
    assert_eq!(Phoneme::from_ipa("ð"), Some(Dh));
    assert_eq!(Phoneme::from_ipa("q"), None);
    assert_eq!(Phoneme::from_ipa(""), None);
  }

  #[test]
  fn test_spelled() {
    assert_eq!(Ah.spelled(), "ah");
    assert_eq!(O.spelled(), "oh");
    assert_eq!(Uh.spelled(), "uh");
    assert_eq!(Eh.spelled(), "eh");
    assert_eq!(L.spelled(), "l");
    assert_eq!(Ee.spelled(), "i");
  }

  #[test]
  fn test_all_distinct() {
    let all = Phoneme::all();
    assert_eq!(all.len(), 39);
    let ipas: std::collections::HashSet<&str> = all.iter().map(|p| p.ipa()).collect();
    assert_eq!(ipas.len(), 39);
  }

  #[test]
  fn test_ipa_round_trip() {
    for p in Phoneme::all() {
      assert_eq!(Phoneme::from_ipa(p.ipa()), Some(p));
      assert_eq!(decode(p.ipa()), vec![p]);
    }
  }
}
