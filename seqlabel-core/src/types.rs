use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One labeled entity: observed symbol indices paired position by position
/// with hidden state indices.
///
/// Both index vectors are resolved against the alphabets of the
/// [`SequenceDataset`](crate::dataset::SequenceDataset) that owns the pair.
/// They always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPair {
    /// Observed symbol indices (amino acids or nucleotides)
    pub observed: Vec<u8>,
    /// Hidden state indices (secondary structure or exon/intron)
    pub hidden: Vec<u8>,
    /// Optional entity tag kept for traceability only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EncodedPair {
    /// Number of positions in the pair.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

/// Error types that can occur while extracting and encoding datasets
#[derive(Error, Debug)]
pub enum SeqLabelError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Annotation record has no raw sequence after its ORIGIN line
    #[error("Missing sequence section: {0}")]
    MissingSequence(String),
    /// Hidden state code outside the hidden alphabet
    #[error("Unknown hidden state {symbol:?} at position {position}")]
    UnknownHiddenState { symbol: char, position: usize },
    /// Observed and hidden raw strings differ in length
    #[error("Length mismatch: {observed} observed symbols vs {hidden} hidden symbols")]
    LengthMismatch { observed: usize, hidden: usize },
    /// The annotation parser rejected an attribute section
    #[error("Annotation parse error: {0}")]
    AnnotationParse(String),
    /// Extractor configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Dataset file could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A loaded dataset violates the alphabet index invariants
    #[error("Corrupt dataset: {0}")]
    CorruptDataset(String),
}
