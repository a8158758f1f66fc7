// =============================================================================
// Alphabets
// =============================================================================

/// The twenty standard amino acids, observed alphabet of structure datasets
pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// DSSP secondary structure classes; the leading blank is the "none" state
pub const DSSP_STATES: &[u8] = b" GHIEBTS";

/// Nucleotides, observed alphabet of gene datasets
pub const NUCLEOTIDES: &[u8] = b"ACGT";

/// Nucleotides plus `N` for ambiguous or unknown bases
pub const NUCLEOTIDES_WITH_UNKNOWN: &[u8] = b"ACGTN";

/// Exon/intron flags, hidden alphabet of gene datasets
pub const GENE_STATES: &[u8] = b"EI";

/// Hidden symbol for positions covered by a coding block
pub const EXON: u8 = b'E';

/// Hidden symbol for positions between coding blocks
pub const INTRON: u8 = b'I';

/// IUPAC ambiguity codes folded into `N` when unknown nucleotides are allowed
pub const AMBIGUOUS_NUCLEOTIDES: &[u8] = b"RYKMSWBDHVN";

// =============================================================================
// DSSP record layout
// =============================================================================

/// Marker introducing the record identifier
pub const HEADER_MARKER: &str = "HEADER";

/// Marker introducing the molecule display name
pub const MOLECULE_MARKER: &str = "MOLECULE:";

/// Header lines end with this character; the first line without it ends the header
pub const HEADER_LINE_TERMINATOR: char = '.';

/// Zero-based column of the residue letter (column 14)
pub const RESIDUE_COLUMN: usize = 13;

/// Zero-based column of the structure code (column 17)
pub const STRUCTURE_COLUMN: usize = 16;

/// Residue character marking a chain break
pub const BREAK_MARKER: u8 = b'!';

/// External spelling of the blank "none" structure state
pub const NONE_STATE_ALIAS: u8 = b'-';

/// Default number of leading residues compared by prefix deduplication
pub const DEFAULT_PREFIX_LENGTH: usize = 10;

// =============================================================================
// GenBank record layout
// =============================================================================

/// Line prefix opening a record
pub const LOCUS_MARKER: &str = "LOCUS";

/// Length units that may follow the sequence length on the LOCUS line
pub const LOCUS_LENGTH_UNITS: [&str; 2] = [" bp", " aa"];

/// Line prefix ending the attribute section
pub const ORIGIN_MARKER: &str = "ORIGIN";

/// Line prefix terminating a record
pub const RECORD_TERMINATOR: &str = "//";

/// Feature key opening a gene context
pub const GENE_FEATURE: &str = "gene";

/// Feature key of a coding region
pub const CDS_FEATURE: &str = "CDS";

/// Character printed in place of an observed sentinel index when decoding
pub const UNKNOWN_SYMBOL: char = '?';
