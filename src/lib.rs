
pub mod errors;
pub mod phonemes;
pub mod features;
pub mod distances;
pub mod translation;
pub mod generation;
pub mod matching;
pub mod dictionary;
pub mod output;
pub mod search;
