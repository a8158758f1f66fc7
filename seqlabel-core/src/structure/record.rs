//! Line-level parsing of DSSP records.
//!
//! Body lines are fixed-column:
//!
//! ```text
//! columns  1..=13  residue number, chain, ...   (ignored)
//! column   14      amino-acid letter, or `!` for a chain break
//! columns 15..=16  filler                        (ignored)
//! column   17      secondary structure code
//! ```

use crate::constants::{
    BREAK_MARKER, HEADER_LINE_TERMINATOR, HEADER_MARKER, MOLECULE_MARKER, NONE_STATE_ALIAS,
    RESIDUE_COLUMN, STRUCTURE_COLUMN,
};

/// The two characters read from a body line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueColumns {
    /// Residue letter as written (lower case marks a bridged cysteine)
    pub amino_acid: char,
    /// Structure code, with `-` normalized to the blank "none" state
    pub structure: char,
}

/// Whether `line` still belongs to the header block.
///
/// Only a period in the very last column counts; trailing blanks end the header.
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    line.ends_with(HEADER_LINE_TERMINATOR)
}

/// First token after a leading `HEADER` marker.
#[must_use]
pub fn header_identifier(line: &str) -> Option<String> {
    let rest = line.strip_prefix(HEADER_MARKER)?;
    rest.split_whitespace().next().map(str::to_owned)
}

/// Display name following `MOLECULE:`, without trailing punctuation.
#[must_use]
pub fn molecule_name(line: &str) -> Option<String> {
    let start = line.find(MOLECULE_MARKER)? + MOLECULE_MARKER.len();
    let name = line[start..]
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':') || c.is_whitespace());
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

/// Reads the residue and structure columns of a body line.
///
/// Returns `None` for lines too short to reach column 17, lines whose residue
/// column is neither a letter nor `!`, and non-ASCII structure columns.
#[must_use]
pub fn parse_body_line(line: &str) -> Option<ResidueColumns> {
    let bytes = line.as_bytes();
    if bytes.len() <= STRUCTURE_COLUMN {
        return None;
    }
    let residue = bytes[RESIDUE_COLUMN];
    if !(residue.is_ascii_alphabetic() || residue == BREAK_MARKER) {
        return None;
    }
    let structure = match bytes[STRUCTURE_COLUMN] {
        NONE_STATE_ALIAS => b' ',
        b if b.is_ascii() => b,
        _ => return None,
    };
    Some(ResidueColumns {
        amino_acid: char::from(residue),
        structure: char::from(structure),
    })
}
