//! Gene structure extraction from GenBank records.
//!
//! Every processed coding region (CDS) becomes one entry: the nucleotides of
//! its shadow paired with exon/intron labels. A CDS belongs to the most recent
//! `gene` feature before it.
//!
//! ## Modules
//!
//! - [`features`]: feature/location model and the [`AnnotationParser`] seam
//! - [`genbank`]: record splitting and the `gb-io` parser
//! - [`projection`]: location-to-label and location-to-sequence projection
//!
//! ```rust,no_run
//! use seqlabel_core::annotation::AnnotationExtractor;
//! use seqlabel_core::config::AnnotationConfig;
//! use seqlabel_core::extractor::Extractor;
//! use std::path::Path;
//!
//! let config = AnnotationConfig { unique_genes: true, ..Default::default() };
//! let mut extractor = AnnotationExtractor::new(config)?;
//! let mut dataset = extractor.new_dataset();
//! let added = extractor.extract_file(Path::new("chr1.gbk"), &mut dataset)?;
//! println!("{added} genes");
//! # Ok::<(), seqlabel_core::types::SeqLabelError>(())
//! ```

pub mod features;
pub mod genbank;
pub mod projection;

use std::path::Path;

use log::{debug, info, warn};

use crate::config::AnnotationConfig;
use crate::dataset::SequenceDataset;
use crate::extractor::Extractor;
use crate::types::SeqLabelError;

pub use features::{AnnotationParser, Block, Feature, Location};
pub use genbank::{GenbankParser, RecordSections, split_records};
pub use projection::{exon_intron_labels, shadow_nucleotides};

/// Per-call counts of what happened to each CDS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneStats {
    /// Appended to the dataset
    pub added: usize,
    /// Skipped because the gene already had a processed CDS
    pub duplicates: usize,
    /// Rejected for unmappable bases, an out-of-range span, or an empty location
    pub rejected: usize,
}

#[derive(Debug)]
struct GeneContext {
    id: String,
    has_cds: bool,
}

/// GenBank front end projecting CDS features onto exon/intron labels.
pub struct AnnotationExtractor {
    config: AnnotationConfig,
    parser: Box<dyn AnnotationParser>,
}

impl std::fmt::Debug for AnnotationExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationExtractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnnotationExtractor {
    /// Creates an extractor using [`GenbankParser`].
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: AnnotationConfig) -> Result<Self, SeqLabelError> {
        Self::with_parser(config, Box::new(GenbankParser))
    }

    /// Creates an extractor with a custom attribute-section parser.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::InvalidConfig`] if `config` fails validation.
    pub fn with_parser(
        config: AnnotationConfig,
        parser: Box<dyn AnnotationParser>,
    ) -> Result<Self, SeqLabelError> {
        config.validate()?;
        Ok(Self { config, parser })
    }

    #[must_use]
    pub const fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    /// Processes every record in `text`.
    ///
    /// # Errors
    ///
    /// * [`SeqLabelError::MissingSequence`] if a record has no sequence section
    /// * [`SeqLabelError::AnnotationParse`] if the parser rejects a record
    pub fn extract_text(
        &mut self,
        text: &str,
        dataset: &mut SequenceDataset,
    ) -> Result<GeneStats, SeqLabelError> {
        let mut stats = GeneStats::default();
        let mut gene_count = 0usize;

        for record in split_records(text)? {
            let features = self.parser.parse(&record.attributes)?;
            let mut context: Option<GeneContext> = None;

            for feature in &features {
                if feature.is_gene() {
                    gene_count += 1;
                    context = Some(GeneContext {
                        id: feature
                            .label()
                            .map_or_else(|| gene_count.to_string(), str::to_owned),
                        has_cds: false,
                    });
                    continue;
                }
                if !feature.is_cds() {
                    continue;
                }

                if let Some(gene) = context.as_mut() {
                    if self.config.unique_genes && gene.has_cds {
                        debug!("Skipping additional CDS of gene {}", gene.id);
                        stats.duplicates += 1;
                        continue;
                    }
                    gene.has_cds = true;
                }
                let id = context
                    .as_ref()
                    .map(|gene| gene.id.clone())
                    .or_else(|| feature.label().map(str::to_owned));

                if self.append_cds(feature, &record, id, dataset)? {
                    stats.added += 1;
                } else {
                    stats.rejected += 1;
                }
            }
        }
        Ok(stats)
    }

    fn append_cds(
        &self,
        feature: &Feature,
        record: &RecordSections,
        id: Option<String>,
        dataset: &mut SequenceDataset,
    ) -> Result<bool, SeqLabelError> {
        let label = id.as_deref().unwrap_or("<unnamed>");
        if feature.location.blocks().is_empty() {
            debug!("Skipping CDS of gene {label}: location covers no bases");
            return Ok(false);
        }

        let hidden = exon_intron_labels(&feature.location);
        let Some(observed) = shadow_nucleotides(
            &record.sequence,
            &feature.location,
            dataset.observed_alphabet(),
            self.config.allow_unknown_nts,
        ) else {
            warn!("Rejecting gene {label}: unrecognized nucleotide or span outside sequence");
            return Ok(false);
        };

        dataset.encode_and_append(&observed, &hidden, id, true)?;
        Ok(true)
    }
}

impl Extractor for AnnotationExtractor {
    fn name(&self) -> &'static str {
        "genbank"
    }

    fn new_dataset(&self) -> SequenceDataset {
        SequenceDataset::for_genes(self.config.allow_unknown_nts)
    }

    fn extract_file(
        &mut self,
        path: &Path,
        dataset: &mut SequenceDataset,
    ) -> Result<usize, SeqLabelError> {
        let text = std::fs::read_to_string(path)?;
        let stats = self.extract_text(&text, dataset).map_err(|e| match e {
            SeqLabelError::MissingSequence(reason) => {
                SeqLabelError::MissingSequence(format!("{}: {reason}", path.display()))
            }
            SeqLabelError::AnnotationParse(reason) => {
                SeqLabelError::AnnotationParse(format!("{}: {reason}", path.display()))
            }
            other => other,
        })?;
        info!(
            "{}: {} genes added, {} rejected, {} duplicate CDS skipped",
            path.display(),
            stats.added,
            stats.rejected,
            stats.duplicates
        );
        Ok(stats.added)
    }
}
