//! Feature model consumed by the annotation extractor.
//!
//! The extractor does not parse the GenBank feature table itself; it receives
//! [`Feature`]s from an [`AnnotationParser`]. Coordinates are 1-based and
//! inclusive, as written in GenBank files.

use bio::bio_types::strand::Strand;

use crate::constants::{CDS_FEATURE, GENE_FEATURE};
use crate::types::SeqLabelError;

/// One contiguous covered interval, 1-based inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    /// Creates a block, swapping the bounds if given in reverse order.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Possibly spliced location: blocks sorted by start, plus a strand.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    blocks: Vec<Block>,
    strand: Strand,
}

impl Location {
    #[must_use]
    pub fn new(mut blocks: Vec<Block>, strand: Strand) -> Self {
        blocks.sort_unstable();
        Self { blocks, strand }
    }

    /// A single forward or reverse block.
    #[must_use]
    pub fn single(start: usize, end: usize, strand: Strand) -> Self {
        Self::new(vec![Block::new(start, end)], strand)
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub const fn strand(&self) -> Strand {
        self.strand
    }

    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.strand == Strand::Reverse
    }

    /// Smallest covered position
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.blocks.iter().map(|b| b.start).min()
    }

    /// Largest covered position
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.blocks.iter().map(|b| b.end).max()
    }

    /// The single interval enclosing every block.
    #[must_use]
    pub fn shadow(&self) -> Option<Block> {
        Some(Block::new(self.min()?, self.max()?))
    }
}

/// A typed, positioned entry of a feature table.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature key, e.g. `gene` or `CDS`
    pub kind: String,
    pub location: Location,
    /// Qualifier key/value pairs in file order
    pub qualifiers: Vec<(String, Option<String>)>,
}

impl Feature {
    #[must_use]
    pub fn new(kind: impl Into<String>, location: Location) -> Self {
        Self {
            kind: kind.into(),
            location,
            qualifiers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qualifiers.push((key.into(), Some(value.into())));
        self
    }

    /// Value of the first qualifier named `key`.
    #[must_use]
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    #[must_use]
    pub fn is_gene(&self) -> bool {
        self.kind == GENE_FEATURE
    }

    #[must_use]
    pub fn is_cds(&self) -> bool {
        self.kind == CDS_FEATURE
    }

    /// Locus tag, falling back to the gene name.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.qualifier("locus_tag").or_else(|| self.qualifier("gene"))
    }
}

/// Parses the attribute section of an annotation record into features.
pub trait AnnotationParser {
    /// Returns the record's features in file order.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::AnnotationParse`] when `text` is not a valid
    /// attribute section.
    fn parse(&self, text: &str) -> Result<Vec<Feature>, SeqLabelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_bounds() {
        let location = Location::new(
            vec![Block::new(7, 9), Block::new(2, 4)],
            Strand::Forward,
        );
        assert_eq!(location.blocks()[0], Block::new(2, 4));
        assert_eq!(location.min(), Some(2));
        assert_eq!(location.max(), Some(9));
        assert_eq!(location.shadow(), Some(Block::new(2, 9)));
        assert!(!location.is_reverse());
    }

    #[test]
    fn test_empty_location() {
        let location = Location::new(Vec::new(), Strand::Unknown);
        assert_eq!(location.min(), None);
        assert_eq!(location.shadow(), None);
    }

    #[test]
    fn test_block_normalizes_order() {
        let block = Block::new(9, 3);
        assert_eq!(block.start, 3);
        assert_eq!(block.end, 9);
        assert_eq!(block.len(), 7);
    }

    #[test]
    fn test_feature_labels() {
        let feature = Feature::new("gene", Location::single(1, 10, Strand::Forward))
            .with_qualifier("gene", "lacZ");
        assert!(feature.is_gene());
        assert!(!feature.is_cds());
        assert_eq!(feature.label(), Some("lacZ"));

        let tagged = feature.with_qualifier("locus_tag", "b0344");
        assert_eq!(tagged.label(), Some("b0344"));
        assert_eq!(tagged.qualifier("product"), None);
    }
}
