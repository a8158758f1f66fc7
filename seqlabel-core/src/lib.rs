//! # SeqLabel - labeled sequence datasets from structure and annotation records
//!
//! Builds training data for hidden-state sequence models. Each biological
//! entity becomes a pair of equally long index sequences: what was observed
//! (amino acids or nucleotides) and the hidden label of every position
//! (secondary structure or exon/intron).
//!
//! ## Features
//!
//! - **DSSP extraction**: residue letters and secondary structure codes from
//!   fixed-column DSSP files, with molecule-name and sequence-prefix deduplication
//! - **GenBank extraction**: exon/intron labels projected from spliced,
//!   strand-aware CDS locations, paired with the nucleotides they span
//! - **Fixed alphabets**: deterministic symbol indices, a sentinel index for
//!   unknown observed symbols, hard errors for unknown hidden states
//! - **Persistence**: datasets round-trip through JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seqlabel_core::config::StructureConfig;
//! use seqlabel_core::extractor::Extractor;
//! use seqlabel_core::structure::StructureExtractor;
//! use std::path::Path;
//!
//! let mut extractor = StructureExtractor::new(StructureConfig::default())?;
//! let mut dataset = extractor.new_dataset();
//! extractor.extract_file(Path::new("1lyz.dssp"), &mut dataset)?;
//!
//! println!("{} proteins", dataset.len());
//! dataset.save("proteins.json")?;
//! # Ok::<(), seqlabel_core::types::SeqLabelError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`alphabet`]: symbol alphabets and index encoding
//! - [`dataset`]: the encoded dataset, its builder operation and persistence
//! - [`structure`]: DSSP extractor
//! - [`annotation`]: GenBank extractor, feature model and projection
//! - [`extractor`]: the trait both extractors implement
//! - [`registry`]: name/prefix deduplication state
//! - [`config`]: per-extractor configuration
//! - [`constants`]: alphabets and record layout constants
//! - [`types`]: encoded pairs and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SeqLabelError>`](types::SeqLabelError).
//! Entities that are merely unusable (duplicates, unmappable bases) are skipped
//! and logged; input that breaks the format contract (unknown hidden states, a
//! GenBank record without sequence) fails the call.

pub mod alphabet;
pub mod annotation;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod extractor;
pub mod registry;
pub mod structure;
pub mod types;

pub use annotation::AnnotationExtractor;
pub use dataset::SequenceDataset;
pub use extractor::Extractor;
pub use structure::StructureExtractor;
pub use types::{EncodedPair, SeqLabelError};
