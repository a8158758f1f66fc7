use crate::constants::DEFAULT_PREFIX_LENGTH;
use crate::types::SeqLabelError;

/// Configuration for extracting protein datasets from DSSP records.
///
/// Controls which records are skipped as duplicates and whether chain breaks
/// survive encoding.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use seqlabel_core::config::StructureConfig;
///
/// let config = StructureConfig::default();
/// assert!(config.unique_names);
/// assert!(!config.include_breaks);
/// ```
///
/// ## Deduplicate by sequence prefix as well
///
/// ```rust
/// use seqlabel_core::config::StructureConfig;
///
/// let config = StructureConfig {
///     unique_prefix: true,
///     prefix_length: 15,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureConfig {
    /// Register each record's molecule name and skip later records using it.
    ///
    /// A name registered by an earlier call always causes a skip, even when
    /// this flag is off for the current call.
    ///
    /// **Default**: `true`
    pub unique_names: bool,

    /// Register each record's leading residues and skip later records
    /// starting with the same residues.
    ///
    /// **Default**: `false`
    pub unique_prefix: bool,

    /// Number of leading residues compared when `unique_prefix` is on.
    ///
    /// **Default**: `10`
    pub prefix_length: usize,

    /// Keep chain-break positions (`!`) in the encoded output.
    ///
    /// Breaks are not amino acids, so kept positions encode to the observed
    /// alphabet's unknown index.
    ///
    /// **Default**: `false`
    pub include_breaks: bool,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            unique_names: true,
            unique_prefix: false,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            include_breaks: false,
        }
    }
}

impl StructureConfig {
    /// Checks option combinations.
    ///
    /// # Errors
    ///
    /// Returns [`SeqLabelError::InvalidConfig`] when prefix deduplication is
    /// enabled with a zero prefix length.
    pub fn validate(&self) -> Result<(), SeqLabelError> {
        if self.unique_prefix && self.prefix_length == 0 {
            return Err(SeqLabelError::InvalidConfig(
                "prefix length must be positive when prefix deduplication is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for extracting gene datasets from GenBank records.
///
/// # Examples
///
/// ```rust
/// use seqlabel_core::config::AnnotationConfig;
///
/// let config = AnnotationConfig {
///     unique_genes: true,
///     ..Default::default()
/// };
/// assert!(!config.allow_unknown_nts);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// Keep at most one coding region per gene.
    ///
    /// **Default**: `false`
    pub unique_genes: bool,

    /// Accept `N` and IUPAC ambiguity codes in coding spans.
    ///
    /// When `false`, any such base rejects the whole gene. When `true`, the
    /// observed alphabet gains `N` and every ambiguity code maps to it.
    ///
    /// **Default**: `false`
    pub allow_unknown_nts: bool,
}

impl AnnotationConfig {
    /// Always succeeds; present so both extractors validate the same way.
    ///
    /// # Errors
    ///
    /// Never returns an error today.
    pub fn validate(&self) -> Result<(), SeqLabelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_defaults() {
        let config = StructureConfig::default();
        assert!(config.unique_names);
        assert!(!config.unique_prefix);
        assert_eq!(config.prefix_length, 10);
        assert!(!config.include_breaks);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_structure_zero_prefix_rejected() {
        let config = StructureConfig {
            unique_prefix: true,
            prefix_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SeqLabelError::InvalidConfig(_))
        ));

        // Irrelevant when prefix deduplication is off
        let config = StructureConfig {
            prefix_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_annotation_defaults() {
        let config = AnnotationConfig::default();
        assert!(!config.unique_genes);
        assert!(!config.allow_unknown_nts);
        assert!(config.validate().is_ok());
    }
}
