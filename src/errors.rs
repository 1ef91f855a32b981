
use thiserror::Error;

pub type Result<T, E = VocabError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum VocabError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("malformed frequency entry: {0:?}")]
  BadFrequency(String),

  #[error("unrecognized pronunciation symbol: {0:?}")]
  UnknownSymbol(String),

  #[error("no features for phoneme: {0}")]
  MissingFeatures(String),

  #[error("unrecognized phoneme: {0:?}")]
  UnknownPhoneme(String),
}
