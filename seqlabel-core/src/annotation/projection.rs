//! Projection of coding-region locations onto per-position labels.

use crate::alphabet::Alphabet;
use crate::annotation::features::Location;
use crate::constants::{AMBIGUOUS_NUCLEOTIDES, EXON, INTRON};

/// Exon/intron labels over the location's shadow.
///
/// Every position between the first and last covered base starts as intron;
/// positions inside a block become exon. Reverse-strand locations are returned
/// reversed end to end. A location without blocks gives an empty label string.
///
/// ```rust
/// use bio::bio_types::strand::Strand;
/// use seqlabel_core::annotation::features::{Block, Location};
/// use seqlabel_core::annotation::projection::exon_intron_labels;
///
/// let spliced = Location::new(vec![Block::new(2, 4), Block::new(7, 9)], Strand::Forward);
/// assert_eq!(exon_intron_labels(&spliced), "EEEIIEEE");
/// ```
#[must_use]
pub fn exon_intron_labels(location: &Location) -> String {
    let Some(shadow) = location.shadow() else {
        return String::new();
    };
    let mut labels = vec![INTRON; shadow.len()];
    for block in location.blocks() {
        let from = block.start - shadow.start;
        let to = block.end - shadow.start;
        labels[from..=to].fill(EXON);
    }
    if location.is_reverse() {
        labels.reverse();
    }
    labels.into_iter().map(char::from).collect()
}

/// Upper-cased nucleotides of the location's shadow, or `None` if the gene
/// must be rejected.
///
/// `sequence` holds the record's raw bases, position 1 at index 0. The shadow
/// is read on the forward strand as stored. With `allow_unknown`, IUPAC
/// ambiguity codes become `N`. Any base outside `alphabet`, or a shadow running
/// past the end of `sequence`, rejects the gene.
#[must_use]
pub fn shadow_nucleotides(
    sequence: &[u8],
    location: &Location,
    alphabet: &Alphabet,
    allow_unknown: bool,
) -> Option<String> {
    let shadow = location.shadow()?;
    if shadow.start == 0 || shadow.end > sequence.len() {
        return None;
    }
    sequence[shadow.start - 1..shadow.end]
        .iter()
        .map(|&base| {
            let base = base.to_ascii_uppercase();
            let base = if allow_unknown && AMBIGUOUS_NUCLEOTIDES.contains(&base) {
                b'N'
            } else {
                base
            };
            alphabet.contains(base).then_some(char::from(base))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::features::Block;
    use crate::dataset::SequenceDataset;
    use bio::bio_types::strand::Strand;

    fn spliced(strand: Strand) -> Location {
        Location::new(vec![Block::new(2, 4), Block::new(7, 9)], strand)
    }

    #[test]
    fn test_forward_labels_encode_to_exon_zero() {
        let labels = exon_intron_labels(&spliced(Strand::Forward));
        assert_eq!(labels.len(), 8);

        let mut dataset = SequenceDataset::for_genes(false);
        dataset
            .encode_and_append("AAAAAAAA", &labels, None, true)
            .unwrap();
        assert_eq!(dataset.entries()[0].hidden, vec![0, 0, 0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_reverse_labels_are_reversed() {
        let location = Location::new(vec![Block::new(1, 2), Block::new(6, 10)], Strand::Forward);
        assert_eq!(exon_intron_labels(&location), "EEIIIEEEEE");

        let location = Location::new(vec![Block::new(1, 2), Block::new(6, 10)], Strand::Reverse);
        assert_eq!(exon_intron_labels(&location), "EEEEEIIIEE");
    }

    #[test]
    fn test_reverse_of_symmetric_is_identical() {
        assert_eq!(
            exon_intron_labels(&spliced(Strand::Reverse)),
            exon_intron_labels(&spliced(Strand::Forward))
        );
    }

    #[test]
    fn test_unspliced_is_all_exon() {
        let location = Location::single(5, 10, Strand::Forward);
        assert_eq!(exon_intron_labels(&location), "EEEEEE");
    }

    #[test]
    fn test_empty_location_gives_empty_labels() {
        let location = Location::new(Vec::new(), Strand::Forward);
        assert_eq!(exon_intron_labels(&location), "");
    }

    #[test]
    fn test_shadow_nucleotides() {
        let sequence = b"acgtacgtac";
        let alphabet = Alphabet::nucleotides(false);
        let observed =
            shadow_nucleotides(sequence, &spliced(Strand::Forward), &alphabet, false).unwrap();
        assert_eq!(observed, "CGTACGTA");
    }

    #[test]
    fn test_shadow_not_reverse_complemented() {
        let sequence = b"acgtacgtac";
        let alphabet = Alphabet::nucleotides(false);
        let forward = shadow_nucleotides(sequence, &spliced(Strand::Forward), &alphabet, false);
        let reverse = shadow_nucleotides(sequence, &spliced(Strand::Reverse), &alphabet, false);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_unknown_base_rejects() {
        let sequence = b"acgtnngtac";
        let location = Location::single(2, 8, Strand::Forward);
        assert_eq!(
            shadow_nucleotides(sequence, &location, &Alphabet::nucleotides(false), false),
            None
        );
        assert_eq!(
            shadow_nucleotides(sequence, &location, &Alphabet::nucleotides(true), true),
            Some("CGTNNGT".to_string())
        );
    }

    #[test]
    fn test_ambiguity_codes_fold_into_n() {
        let sequence = b"acrygt";
        let location = Location::single(1, 6, Strand::Forward);
        let alphabet = Alphabet::nucleotides(true);
        assert_eq!(
            shadow_nucleotides(sequence, &location, &alphabet, true),
            Some("ACNNGT".to_string())
        );
        assert_eq!(shadow_nucleotides(sequence, &location, &alphabet, false), None);
    }

    #[test]
    fn test_shadow_out_of_bounds_rejects() {
        let alphabet = Alphabet::nucleotides(false);
        let location = Location::single(3, 12, Strand::Forward);
        assert_eq!(shadow_nucleotides(b"acgtacgt", &location, &alphabet, false), None);
    }
}
