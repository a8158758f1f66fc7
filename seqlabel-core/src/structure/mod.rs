//! Protein secondary-structure extraction from DSSP records.
//!
//! Each DSSP file yields at most one entry: the residue letters of the chain
//! paired with their secondary structure codes. Records are skipped when their
//! molecule name or leading residues were already seen by the same extractor.
//!
//! ```rust,no_run
//! use seqlabel_core::config::StructureConfig;
//! use seqlabel_core::extractor::Extractor;
//! use seqlabel_core::structure::StructureExtractor;
//! use std::path::Path;
//!
//! let mut extractor = StructureExtractor::new(StructureConfig::default())?;
//! let mut dataset = extractor.new_dataset();
//! for path in ["1lyz.dssp", "2lzm.dssp"] {
//!     extractor.extract_file(Path::new(path), &mut dataset)?;
//! }
//! dataset.save("proteins.json")?;
//! # Ok::<(), seqlabel_core::types::SeqLabelError>(())
//! ```

pub mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::config::StructureConfig;
use crate::dataset::SequenceDataset;
use crate::extractor::Extractor;
use crate::registry::UniquenessRegistry;
use crate::types::SeqLabelError;

pub use record::{
    ResidueColumns, header_identifier, is_header_line, molecule_name, parse_body_line,
};

/// What happened to one DSSP record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureOutcome {
    /// Appended to the dataset at this index
    Added(usize),
    /// Molecule name already registered; scanning stopped at the name line
    DuplicateName(String),
    /// Leading residues already registered
    DuplicatePrefix(String),
}

/// DSSP front end with per-instance name and prefix registries.
#[derive(Debug, Clone)]
pub struct StructureExtractor {
    config: StructureConfig,
    registry: UniquenessRegistry,
}

impl StructureExtractor {
    /// Creates an extractor with empty registries.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: StructureConfig) -> Result<Self, SeqLabelError> {
        config.validate()?;
        Ok(Self {
            config,
            registry: UniquenessRegistry::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &StructureConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &UniquenessRegistry {
        &self.registry
    }

    /// Scans one DSSP record from `reader`.
    ///
    /// # Errors
    ///
    /// Propagates read errors and [`SeqLabelError::UnknownHiddenState`] from
    /// encoding.
    pub fn extract_reader<R: BufRead>(
        &mut self,
        reader: R,
        dataset: &mut SequenceDataset,
    ) -> Result<StructureOutcome, SeqLabelError> {
        let mut identifier: Option<String> = None;
        let mut in_header = true;
        let mut amino_acids = String::new();
        let mut structures = String::new();

        for line in reader.lines() {
            let line = line?;

            if identifier.is_none() {
                identifier = header_identifier(&line);
            }
            if let Some(name) = molecule_name(&line) {
                if self.registry.contains_name(&name) {
                    debug!("Skipping duplicate molecule {name}");
                    return Ok(StructureOutcome::DuplicateName(name));
                }
                if self.config.unique_names {
                    self.registry.register_name(&name);
                }
            }

            if in_header {
                // The line closing the header is the column legend, not a residue
                in_header = is_header_line(&line);
                continue;
            }

            match parse_body_line(&line) {
                Some(ResidueColumns {
                    amino_acid,
                    structure,
                }) => {
                    amino_acids.push(amino_acid);
                    structures.push(structure);
                }
                None => trace!("Ignoring body line {line:?}"),
            }
        }

        let prefix: String = amino_acids.chars().take(self.config.prefix_length).collect();
        if self.registry.contains_prefix(&prefix) {
            debug!("Skipping duplicate sequence prefix {prefix}");
            return Ok(StructureOutcome::DuplicatePrefix(prefix));
        }
        if self.config.unique_prefix {
            self.registry.register_prefix(&prefix);
        }

        let index = dataset.encode_and_append(
            &amino_acids,
            &structures,
            identifier,
            self.config.include_breaks,
        )?;
        Ok(StructureOutcome::Added(index))
    }
}

impl Extractor for StructureExtractor {
    fn name(&self) -> &'static str {
        "dssp"
    }

    fn new_dataset(&self) -> SequenceDataset {
        SequenceDataset::for_structures()
    }

    fn extract_file(
        &mut self,
        path: &Path,
        dataset: &mut SequenceDataset,
    ) -> Result<usize, SeqLabelError> {
        let reader = BufReader::new(File::open(path)?);
        match self.extract_reader(reader, dataset)? {
            StructureOutcome::Added(index) => {
                debug!(
                    "{}: {} residues",
                    path.display(),
                    dataset.entries()[index].len()
                );
                Ok(1)
            }
            StructureOutcome::DuplicateName(_) | StructureOutcome::DuplicatePrefix(_) => Ok(0),
        }
    }
}
