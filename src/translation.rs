
use crate::errors::{Result, VocabError};
use crate::phonemes::Phoneme;

// ARPAbet symbol (already stripped of stress digits) to working-alphabet
// phonemes. One symbol can expand to several phonemes, though the current
// table is one-to-one.
pub fn arpabet_symbol_to_phonemes(symbol: &str) -> Option<Vec<Phoneme>> {
  use Phoneme::*;

  Some(match symbol {
    "AA" => vec![Ah],
    "AE" => vec![Ae],
    "AH" => vec![Uh],
    "AO" => vec![Aw],
    "AW" => vec![Ow],
    "AY" => vec![Ai],
    "B" => vec![B],
    "CH" => vec![Ch],
    "D" => vec![D],
    "DH" => vec![Dh],
    "EH" => vec![Eh],
    "ER" => vec![Eh], // the source table folds ER into ɛ rather than ɝ
    "EY" => vec![Ei],
    "F" => vec![F],
    "G" => vec![G],
    "HH" => vec![H],
    "IH" => vec![Ih],
    "IY" => vec![Ee],
    "JH" => vec![J],
    "K" => vec![K],
    "L" => vec![L],
    "M" => vec![M],
    "N" => vec![N],
    "NG" => vec![Ng],
    "OW" => vec![O],
    "OY" => vec![Oi],
    "P" => vec![P],
    "R" => vec![R],
    "S" => vec![S],
    "SH" => vec![Sh],
    "T" => vec![T],
    "TH" => vec![Th],
    "UH" => vec![Oo],
    "UW" => vec![U],
    "V" => vec![V],
    "W" => vec![W],
    "Y" => vec![Y],
    "Z" => vec![Z],
    "ZH" => vec![Zh],
    _ => None?
  })
}

// A symbol with no translation aborts the run; the dictionary is assumed to
// be internally consistent with the table.
pub fn translate_word(symbols: &[String]) -> Result<Vec<Phoneme>> {
  let mut res = vec![];

  for symbol in symbols {
    match arpabet_symbol_to_phonemes(symbol) {
      Some(ps) => res.extend(ps),
      None => return Err(VocabError::UnknownSymbol(symbol.clone()))
    }
  }

  Ok(res)
}
