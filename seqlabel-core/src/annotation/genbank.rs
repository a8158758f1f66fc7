//! GenBank record splitting and the `gb-io` backed feature parser.
//!
//! The raw nucleotide block after `ORIGIN` is pulled out with a plain line
//! scan, so only the attribute section goes through the full GenBank parser.

use bio::bio_types::strand::Strand;
use gb_io::reader::SeqReader;
use gb_io::seq::Location as GbLocation;

use crate::annotation::features::{AnnotationParser, Block, Feature, Location};
use crate::constants::{LOCUS_LENGTH_UNITS, LOCUS_MARKER, ORIGIN_MARKER, RECORD_TERMINATOR};
use crate::types::SeqLabelError;

/// A GenBank record split at its `ORIGIN` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSections {
    /// Every line up to and including `ORIGIN`
    pub attributes: String,
    /// Lower-case nucleotides following `ORIGIN`, everything else stripped
    pub sequence: Vec<u8>,
}

/// Splits `text` into one [`RecordSections`] per `//`-terminated record.
///
/// A missing terminator on the last record is tolerated.
///
/// # Errors
///
/// Returns [`SeqLabelError::MissingSequence`] when a record has no `ORIGIN`
/// line or no nucleotides after it, or when `text` holds no record at all.
pub fn split_records(text: &str) -> Result<Vec<RecordSections>, SeqLabelError> {
    let mut records = Vec::new();
    let mut attributes = String::new();
    let mut sequence = Vec::new();
    let mut in_sequence = false;

    for line in text.lines() {
        if line.starts_with(RECORD_TERMINATOR) {
            finish_record(&mut records, &mut attributes, &mut sequence, in_sequence)?;
            in_sequence = false;
        } else if in_sequence {
            sequence.extend(line.bytes().filter(u8::is_ascii_lowercase));
        } else {
            attributes.push_str(line);
            attributes.push('\n');
            in_sequence = line.starts_with(ORIGIN_MARKER);
        }
    }
    finish_record(&mut records, &mut attributes, &mut sequence, in_sequence)?;

    if records.is_empty() {
        return Err(SeqLabelError::MissingSequence(
            "no GenBank record found".into(),
        ));
    }
    Ok(records)
}

fn finish_record(
    records: &mut Vec<RecordSections>,
    attributes: &mut String,
    sequence: &mut Vec<u8>,
    in_sequence: bool,
) -> Result<(), SeqLabelError> {
    if !in_sequence && attributes.trim().is_empty() {
        attributes.clear();
        return Ok(());
    }
    let record = records.len() + 1;
    if !in_sequence {
        return Err(SeqLabelError::MissingSequence(format!(
            "record {record} has no {ORIGIN_MARKER} line"
        )));
    }
    if sequence.is_empty() {
        return Err(SeqLabelError::MissingSequence(format!(
            "record {record} has no nucleotides after {ORIGIN_MARKER}"
        )));
    }
    records.push(RecordSections {
        attributes: std::mem::take(attributes),
        sequence: std::mem::take(sequence),
    });
    Ok(())
}

/// Rewrites the sequence length declared on a LOCUS line to `0`.
///
/// Attribute sections reach the parser without their nucleotides, and `gb-io`
/// checks the sequence it read against the declared length. Lines without a
/// `<digits> bp` or `<digits> aa` token are returned unchanged.
#[must_use]
pub fn zero_locus_length(line: &str) -> String {
    for unit in LOCUS_LENGTH_UNITS {
        for (at, _) in line.match_indices(unit) {
            let head = &line[..at];
            let digits_start = head.trim_end_matches(|c: char| c.is_ascii_digit()).len();
            if digits_start < at && head[..digits_start].ends_with(' ') {
                return format!("{}0{}", &line[..digits_start], &line[at..]);
            }
        }
    }
    line.to_owned()
}

/// [`AnnotationParser`] backed by the `gb-io` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenbankParser;

impl AnnotationParser for GenbankParser {
    fn parse(&self, text: &str) -> Result<Vec<Feature>, SeqLabelError> {
        let mut record = String::with_capacity(text.len() + 4);
        for line in text.lines() {
            if line.starts_with(LOCUS_MARKER) {
                record.push_str(&zero_locus_length(line));
            } else {
                record.push_str(line);
            }
            record.push('\n');
        }
        record.push_str(RECORD_TERMINATOR);
        record.push('\n');

        let mut features = Vec::new();
        for seq in SeqReader::new(record.as_bytes()) {
            let seq = seq.map_err(|e| SeqLabelError::AnnotationParse(e.to_string()))?;
            for feature in &seq.features {
                features.push(Feature {
                    kind: feature.kind.to_string(),
                    location: convert_location(&feature.location),
                    qualifiers: feature
                        .qualifiers
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.clone()))
                        .collect(),
                });
            }
        }
        Ok(features)
    }
}

/// Flattens a `gb-io` location into sorted 1-based inclusive blocks.
///
/// The result is on the reverse strand only when every block is complemented;
/// mixed-strand locations get [`Strand::Unknown`].
#[must_use]
pub fn convert_location(location: &GbLocation) -> Location {
    let mut segments = Vec::new();
    collect_segments(location, false, &mut segments);

    let strand = if segments.is_empty() {
        Strand::Unknown
    } else if segments.iter().all(|&(_, reverse)| reverse) {
        Strand::Reverse
    } else if segments.iter().all(|&(_, reverse)| !reverse) {
        Strand::Forward
    } else {
        Strand::Unknown
    };
    Location::new(segments.into_iter().map(|(block, _)| block).collect(), strand)
}

fn collect_segments(location: &GbLocation, reverse: bool, out: &mut Vec<(Block, bool)>) {
    match location {
        // gb-io ranges are 0-based and end-exclusive
        GbLocation::Range((a, _), (b, _)) => {
            let start = (*a).min(*b);
            let end = (*a).max(*b);
            if start >= 0 && end > start {
                out.push((Block::new(start as usize + 1, end as usize), reverse));
            }
        }
        GbLocation::Complement(inner) => collect_segments(inner, !reverse, out),
        GbLocation::Join(parts)
        | GbLocation::Order(parts)
        | GbLocation::Bond(parts)
        | GbLocation::OneOf(parts) => {
            for part in parts {
                collect_segments(part, reverse, out);
            }
        }
        // Between-base sites, gaps and references to other records cover nothing here
        _ => {}
    }
}
