//! The shared dataset sink both extractors append to.
//!
//! A [`SequenceDataset`] owns one observed and one hidden [`Alphabet`] and an
//! ordered list of [`EncodedPair`]s resolved against them. The only way to add
//! data is [`SequenceDataset::encode_and_append`], which enforces the index
//! invariants at the point of insertion.
//!
//! ```rust
//! use seqlabel_core::dataset::SequenceDataset;
//!
//! let mut dataset = SequenceDataset::for_structures();
//! dataset.encode_and_append("ACD", " HG", Some("1LYZ".into()), false)?;
//!
//! let pair = &dataset.entries()[0];
//! assert_eq!(pair.observed, vec![0, 1, 2]);
//! assert_eq!(pair.hidden, vec![0, 2, 1]);
//! # Ok::<(), seqlabel_core::types::SeqLabelError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::constants::BREAK_MARKER;
use crate::types::{EncodedPair, SeqLabelError};

/// Ordered collection of encoded pairs sharing two fixed alphabets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDataset {
    observed_alphabet: Alphabet,
    hidden_alphabet: Alphabet,
    entries: Vec<EncodedPair>,
}

impl SequenceDataset {
    /// Creates an empty dataset over the given alphabets.
    #[must_use]
    pub fn new(observed_alphabet: Alphabet, hidden_alphabet: Alphabet) -> Self {
        Self {
            observed_alphabet,
            hidden_alphabet,
            entries: Vec::new(),
        }
    }

    /// Amino acids observed, DSSP secondary structure hidden.
    #[must_use]
    pub fn for_structures() -> Self {
        Self::new(Alphabet::amino_acids(), Alphabet::dssp_states())
    }

    /// Nucleotides observed, exon/intron hidden.
    #[must_use]
    pub fn for_genes(allow_unknown_nts: bool) -> Self {
        Self::new(
            Alphabet::nucleotides(allow_unknown_nts),
            Alphabet::gene_states(),
        )
    }

    #[must_use]
    pub const fn observed_alphabet(&self) -> &Alphabet {
        &self.observed_alphabet
    }

    #[must_use]
    pub const fn hidden_alphabet(&self) -> &Alphabet {
        &self.hidden_alphabet
    }

    #[must_use]
    pub fn entries(&self) -> &[EncodedPair] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EncodedPair> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes a raw observed/hidden string pair and appends it.
    ///
    /// Positions whose observed character is the break marker `!` are dropped
    /// unless `include_breaks` is set. Lower-case observed letters encode as
    /// their upper-case form. Observed characters outside the alphabet get the
    /// sentinel index; hidden characters outside the alphabet are an error.
    ///
    /// Returns the index of the appended entry.
    ///
    /// # Errors
    ///
    /// * [`SeqLabelError::LengthMismatch`] if the raw strings differ in length
    /// * [`SeqLabelError::UnknownHiddenState`] for an unrecognized hidden code;
    ///   the dataset is left unchanged
    pub fn encode_and_append(
        &mut self,
        observed_raw: &str,
        hidden_raw: &str,
        id: Option<String>,
        include_breaks: bool,
    ) -> Result<usize, SeqLabelError> {
        let observed_raw = observed_raw.as_bytes();
        let hidden_raw = hidden_raw.as_bytes();
        if observed_raw.len() != hidden_raw.len() {
            return Err(SeqLabelError::LengthMismatch {
                observed: observed_raw.len(),
                hidden: hidden_raw.len(),
            });
        }

        let kept = if include_breaks {
            observed_raw.len()
        } else {
            observed_raw.iter().filter(|&&c| c != BREAK_MARKER).count()
        };
        let mut observed = Vec::with_capacity(kept);
        let mut hidden = Vec::with_capacity(kept);

        for (position, (&o, &h)) in observed_raw.iter().zip(hidden_raw).enumerate() {
            if !include_breaks && o == BREAK_MARKER {
                continue;
            }
            // Lower-case residues mark bridged cysteines
            let o = o.to_ascii_uppercase();
            observed.push(self.observed_alphabet.encode_or_unknown(o));
            let h = self.hidden_alphabet.index_of(h).ok_or_else(|| {
                SeqLabelError::UnknownHiddenState {
                    symbol: char::from(h),
                    position,
                }
            })?;
            hidden.push(h);
        }

        self.entries.push(EncodedPair {
            observed,
            hidden,
            id,
        });
        Ok(self.entries.len() - 1)
    }

    /// Observed symbols of `pair`, sentinel slots shown as `?`.
    #[must_use]
    pub fn decode_observed(&self, pair: &EncodedPair) -> String {
        self.observed_alphabet.decode(&pair.observed)
    }

    /// Hidden symbols of `pair`.
    #[must_use]
    pub fn decode_hidden(&self, pair: &EncodedPair) -> String {
        self.hidden_alphabet.decode(&pair.hidden)
    }

    /// Checks every entry against the length and alphabet index invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::CorruptDataset`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), SeqLabelError> {
        let observed_limit = self.observed_alphabet.unknown_index();
        let hidden_limit = self.hidden_alphabet.len();
        for (i, pair) in self.entries.iter().enumerate() {
            if pair.observed.len() != pair.hidden.len() {
                return Err(SeqLabelError::CorruptDataset(format!(
                    "entry {i}: {} observed vs {} hidden positions",
                    pair.observed.len(),
                    pair.hidden.len()
                )));
            }
            if let Some(&bad) = pair.observed.iter().find(|&&o| o > observed_limit) {
                return Err(SeqLabelError::CorruptDataset(format!(
                    "entry {i}: observed index {bad} out of range"
                )));
            }
            if let Some(&bad) = pair
                .hidden
                .iter()
                .find(|&&h| usize::from(h) >= hidden_limit)
            {
                return Err(SeqLabelError::CorruptDataset(format!(
                    "entry {i}: hidden index {bad} out of range"
                )));
            }
        }
        Ok(())
    }

    /// Writes the dataset as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates I/O and serialization failures.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SeqLabelError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a dataset written by [`save`](Self::save) and validates it.
    ///
    /// # Errors
    ///
    /// Propagates I/O and deserialization failures, and returns
    /// [`SeqLabelError::CorruptDataset`] if the content breaks an invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeqLabelError> {
        let reader = BufReader::new(File::open(path)?);
        let dataset: Self = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Aggregate statistics over all entries.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        let lengths = self.entries.iter().map(EncodedPair::len);
        DatasetSummary {
            entries: self.entries.len(),
            total_length: lengths.clone().sum(),
            min_length: lengths.clone().min().unwrap_or(0),
            max_length: lengths.max().unwrap_or(0),
            unknown_observed: self
                .entries
                .iter()
                .flat_map(|p| p.observed.iter())
                .filter(|&&o| o == self.observed_alphabet.unknown_index())
                .count(),
        }
    }
}

impl<'a> IntoIterator for &'a SequenceDataset {
    type Item = &'a EncodedPair;
    type IntoIter = std::slice::Iter<'a, EncodedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Size statistics of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    /// Number of encoded pairs
    pub entries: usize,
    /// Sum of all pair lengths
    pub total_length: usize,
    /// Shortest pair length (0 when empty)
    pub min_length: usize,
    /// Longest pair length (0 when empty)
    pub max_length: usize,
    /// Observed positions holding the unknown sentinel
    pub unknown_observed: usize,
}

impl DatasetSummary {
    /// Mean pair length, 0.0 for an empty dataset.
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.entries == 0 {
            0.0
        } else {
            self.total_length as f64 / self.entries as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_encode_and_append_basic() {
        let mut dataset = SequenceDataset::for_structures();
        let index = dataset
            .encode_and_append("ACD", " HG", Some("1LYZ".to_string()), false)
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(dataset.len(), 1);

        let pair = &dataset.entries()[0];
        assert_eq!(pair.observed, vec![0, 1, 2]);
        assert_eq!(pair.hidden, vec![0, 2, 1]);
        assert_eq!(pair.id.as_deref(), Some("1LYZ"));
    }

    #[test]
    fn test_lower_case_encodes_as_upper_case() {
        let mut dataset = SequenceDataset::for_structures();
        dataset.encode_and_append("cC", "EE", None, false).unwrap();
        let pair = &dataset.entries()[0];
        assert_eq!(pair.observed[0], pair.observed[1]);
        assert_eq!(pair.observed[0], 1);
    }

    #[test]
    fn test_breaks_excluded() {
        let mut dataset = SequenceDataset::for_structures();
        dataset
            .encode_and_append("AC!!DE", "HH  HH", None, false)
            .unwrap();
        let pair = &dataset.entries()[0];
        assert_eq!(pair.len(), 4);
        assert_eq!(dataset.decode_observed(pair), "ACDE");
        assert_eq!(dataset.decode_hidden(pair), "HHHH");
    }

    #[test]
    fn test_breaks_included_use_sentinel() {
        let mut dataset = SequenceDataset::for_structures();
        dataset.encode_and_append("A!C", "H H", None, true).unwrap();
        let pair = &dataset.entries()[0];
        assert_eq!(pair.observed, vec![0, 20, 1]);
        assert_eq!(pair.hidden, vec![2, 0, 2]);
    }

    #[test]
    fn test_unknown_observed_is_soft() {
        let mut dataset = SequenceDataset::for_structures();
        dataset.encode_and_append("AXB", "   ", None, false).unwrap();
        let pair = &dataset.entries()[0];
        assert_eq!(pair.observed, vec![0, 20, 20]);
        assert_eq!(dataset.summary().unknown_observed, 2);
    }

    #[test]
    fn test_unknown_hidden_is_fatal() {
        let mut dataset = SequenceDataset::for_structures();
        let err = dataset
            .encode_and_append("ACD", " HQ", None, false)
            .unwrap_err();
        match err {
            SeqLabelError::UnknownHiddenState { symbol, position } => {
                assert_eq!(symbol, 'Q');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let mut dataset = SequenceDataset::for_genes(false);
        let err = dataset.encode_and_append("ACGT", "EEE", None, true);
        assert!(matches!(
            err,
            Err(SeqLabelError::LengthMismatch {
                observed: 4,
                hidden: 3
            })
        ));
    }

    #[test]
    fn test_empty_pair_permitted() {
        let mut dataset = SequenceDataset::for_structures();
        dataset.encode_and_append("", "", None, false).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.entries()[0].is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let mut dataset = SequenceDataset::for_genes(true);
        dataset
            .encode_and_append("ACGTN", "EEIEE", Some("g1".to_string()), true)
            .unwrap();
        dataset
            .encode_and_append("GGA", "EEE", None, true)
            .unwrap();

        let file = NamedTempFile::new().unwrap();
        dataset.save(file.path()).unwrap();
        let loaded = SequenceDataset::load(file.path()).unwrap();
        assert_eq!(loaded, dataset);
        assert_eq!(loaded.observed_alphabet().symbols(), b"ACGTN");
    }

    #[test]
    fn test_load_rejects_out_of_range_index() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"observed_alphabet":"ACGT","hidden_alphabet":"EI","entries":[{"observed":[0,9],"hidden":[0,1]}]}"#,
        )
        .unwrap();
        let result = SequenceDataset::load(file.path());
        assert!(matches!(result, Err(SeqLabelError::CorruptDataset(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SequenceDataset::load("does/not/exist.json");
        assert!(matches!(result, Err(SeqLabelError::IoError(_))));
    }

    #[test]
    fn test_summary() {
        let mut dataset = SequenceDataset::for_genes(false);
        assert_eq!(dataset.summary(), DatasetSummary::default());
        assert_eq!(dataset.summary().mean_length(), 0.0);

        dataset.encode_and_append("AC", "EE", None, true).unwrap();
        dataset.encode_and_append("ACGT", "EIIE", None, true).unwrap();
        let summary = dataset.summary();
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.total_length, 6);
        assert_eq!(summary.min_length, 2);
        assert_eq!(summary.max_length, 4);
        assert!((summary.mean_length() - 3.0).abs() < f64::EPSILON);
    }
}
