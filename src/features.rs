
use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::errors::{Result, VocabError};
use crate::phonemes::Phoneme;

pub struct FeatureTable {
  items: HashMap<Phoneme, HashMap<String, Value>>
}

lazy_static! {
  static ref BLOCK_COMMENT_RE: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
  static ref LINE_COMMENT_RE: Regex = Regex::new(r"//[^\n]*").unwrap();
  static ref TRAILING_COMMA_RE: Regex = Regex::new(r",(\s*[}\]])").unwrap();
}

impl FeatureTable {
  pub fn new(items: HashMap<Phoneme, HashMap<String, Value>>) -> FeatureTable {
    FeatureTable { items }
  }

  // The serialized table may carry comments and trailing commas; both are
  // stripped before handing the text to serde_json.
  pub fn parse(text: &str) -> Result<FeatureTable> {
    let text = BLOCK_COMMENT_RE.replace_all(text, "");
    let text = LINE_COMMENT_RE.replace_all(&text, "");
    let text = TRAILING_COMMA_RE.replace_all(&text, "$1");

    let raw: HashMap<String, HashMap<String, Value>> = serde_json::from_str(&text)?;

    let mut items = HashMap::new();
    for (symbol, features) in raw {
      match Phoneme::from_ipa(&symbol) {
        Some(p) => {
          items.insert(p, features);
        },
        None => {
          log::warn!("Ignoring feature entry for unknown phoneme {:?}", symbol);
        }
      }
    }

    Ok(FeatureTable { items })
  }

  pub fn load(path: &str) -> Result<FeatureTable> {
    FeatureTable::parse(&fs::read_to_string(path)?)
  }

  pub fn features(&self, p: Phoneme) -> Result<&HashMap<String, Value>> {
    self.items.get(&p).ok_or_else(|| VocabError::MissingFeatures(p.ipa().to_owned()))
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_plain() {
    let table = FeatureTable::parse(r#"{"l": {"voiced": true}, "ɑ": {"height": "low"}}"#).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.features(Phoneme::L).unwrap().get("voiced"), Some(&json!(true)));
    assert_eq!(table.features(Phoneme::Ah).unwrap().get("height"), Some(&json!("low")));
  }

  #[test]
  fn test_parse_comments_and_trailing_commas() {
    let text = r#"
      // articulatory features
      {
        /* consonants */
        "l": {
          "voiced": true,
          "manner": "liquid",
        },
        "ɑ": { "height": "low" }, // a vowel
      }
    "#;
    let table = FeatureTable::parse(text).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.features(Phoneme::L).unwrap().get("manner"), Some(&json!("liquid")));
  }

  #[test]
  fn test_parse_malformed() {
    assert!(FeatureTable::parse(r#"{"l": "#).is_err());
    assert!(FeatureTable::parse(r#"["l"]"#).is_err());
  }

  #[test]
  fn test_parse_skips_unknown_symbols() {
    let table = FeatureTable::parse(r#"{"l": {}, "ɝ": {"rhotic": true}}"#).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.features(Phoneme::L).is_ok());
  }

  #[test]
  fn test_missing_features_is_an_error() {
    let table = FeatureTable::parse(r#"{"l": {}}"#).unwrap();
    match table.features(Phoneme::Dh) {
      Err(VocabError::MissingFeatures(symbol)) => assert_eq!(symbol, "ð"),
      other => panic!("expected MissingFeatures, got {:?}", other.map(|_| ()))
    }
  }

  #[test]
  fn test_load_bundled_table() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/res/ipaFeatureMapping.json");
    let table = FeatureTable::load(path).unwrap();
    for p in Phoneme::all() {
      assert!(table.features(p).is_ok(), "no features for {}", p);
    }
  }
}
