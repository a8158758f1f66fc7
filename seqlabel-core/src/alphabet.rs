//! Fixed symbol alphabets and the symbol-to-index encoder.
//!
//! An [`Alphabet`] is an ordered set of ASCII symbols. A symbol's index is its
//! position in that order, so the mapping is deterministic and stable across
//! runs. Index `len()` is never assigned to a symbol: it is reserved as the
//! sentinel for observed symbols the alphabet does not know.
//!
//! ```rust
//! use seqlabel_core::alphabet::Alphabet;
//!
//! let aa = Alphabet::amino_acids();
//! assert_eq!(aa.index_of(b'C'), Some(1));
//! assert_eq!(aa.encode_or_unknown(b'X'), aa.unknown_index());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    AMINO_ACIDS, DSSP_STATES, GENE_STATES, NUCLEOTIDES, NUCLEOTIDES_WITH_UNKNOWN, UNKNOWN_SYMBOL,
};
use crate::types::SeqLabelError;

/// Ordered, immutable set of symbols defining indices `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Builds an alphabet from distinct ASCII symbols.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::InvalidConfig`] when the symbol list is empty,
    /// contains non-ASCII bytes or duplicates, or is too long for the
    /// sentinel index to fit in a `u8`.
    pub fn new(symbols: &[u8]) -> Result<Self, SeqLabelError> {
        if symbols.is_empty() {
            return Err(SeqLabelError::InvalidConfig("empty alphabet".into()));
        }
        if symbols.len() >= usize::from(u8::MAX) {
            return Err(SeqLabelError::InvalidConfig(format!(
                "alphabet of {} symbols leaves no room for the unknown index",
                symbols.len()
            )));
        }
        for (i, &s) in symbols.iter().enumerate() {
            if !s.is_ascii() {
                return Err(SeqLabelError::InvalidConfig(format!(
                    "non-ASCII alphabet symbol 0x{s:02x}"
                )));
            }
            if symbols[..i].contains(&s) {
                return Err(SeqLabelError::InvalidConfig(format!(
                    "duplicate alphabet symbol {:?}",
                    s as char
                )));
            }
        }
        Ok(Self {
            symbols: symbols.to_vec(),
        })
    }

    /// Observed alphabet for protein datasets
    #[must_use]
    pub fn amino_acids() -> Self {
        Self::from_static(AMINO_ACIDS)
    }

    /// Hidden alphabet for protein datasets
    #[must_use]
    pub fn dssp_states() -> Self {
        Self::from_static(DSSP_STATES)
    }

    /// Observed alphabet for gene datasets, with `N` when `allow_unknown` is set
    #[must_use]
    pub fn nucleotides(allow_unknown: bool) -> Self {
        if allow_unknown {
            Self::from_static(NUCLEOTIDES_WITH_UNKNOWN)
        } else {
            Self::from_static(NUCLEOTIDES)
        }
    }

    /// Hidden alphabet for gene datasets
    #[must_use]
    pub fn gene_states() -> Self {
        Self::from_static(GENE_STATES)
    }

    fn from_static(symbols: &'static [u8]) -> Self {
        Self {
            symbols: symbols.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Index of `symbol`, or `None` if it is not part of the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: u8) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|i| i as u8)
    }

    /// The reserved out-of-range index standing for an unknown symbol.
    #[must_use]
    pub fn unknown_index(&self) -> u8 {
        self.symbols.len() as u8
    }

    /// Index of `symbol`, falling back to [`unknown_index`](Self::unknown_index).
    #[must_use]
    pub fn encode_or_unknown(&self, symbol: u8) -> u8 {
        self.index_of(symbol).unwrap_or_else(|| self.unknown_index())
    }

    /// Symbol at `index`; `None` for the sentinel and anything beyond it.
    #[must_use]
    pub fn symbol(&self, index: u8) -> Option<u8> {
        self.symbols.get(usize::from(index)).copied()
    }

    /// Maps indices back to symbols, writing `?` for sentinel slots.
    #[must_use]
    pub fn decode(&self, indices: &[u8]) -> String {
        indices
            .iter()
            .map(|&i| self.symbol(i).map_or(UNKNOWN_SYMBOL, char::from))
            .collect()
    }
}

impl TryFrom<String> for Alphabet {
    type Error = SeqLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_bytes())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        // Construction guarantees ASCII
        alphabet.symbols.iter().map(|&b| char::from(b)).collect()
    }
}
