use std::path::Path;

use crate::dataset::SequenceDataset;
use crate::types::SeqLabelError;

/// A source-format front end feeding a [`SequenceDataset`].
///
/// Implementations may keep state across calls (for example deduplication
/// registries), so one instance should process the files of one run in order.
pub trait Extractor {
    /// Short format name used in diagnostics
    fn name(&self) -> &'static str;

    /// An empty dataset over the alphabets this extractor encodes into.
    fn new_dataset(&self) -> SequenceDataset;

    /// Reads one input file and appends its entries to `dataset`.
    ///
    /// Returns the number of entries appended.
    ///
    /// # Errors
    ///
    /// I/O errors propagate unchanged. Format violations that make the
    /// whole run untrustworthy (unknown hidden codes, missing sequence data)
    /// are returned as errors; per-entity rejections are not.
    fn extract_file(
        &mut self,
        path: &Path,
        dataset: &mut SequenceDataset,
    ) -> Result<usize, SeqLabelError>;
}
