use std::collections::HashSet;

/// Names and sequence prefixes seen by one extractor instance.
///
/// The registry lives as long as the extractor that owns it, so deduplication
/// spans every file that extractor processes. A fresh extractor starts empty.
#[derive(Debug, Clone, Default)]
pub struct UniquenessRegistry {
    names: HashSet<String>,
    prefixes: HashSet<String>,
}

impl UniquenessRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Records `name`; returns `false` if it was already present.
    pub fn register_name(&mut self, name: &str) -> bool {
        self.names.insert(name.to_owned())
    }

    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Records `prefix`; returns `false` if it was already present.
    pub fn register_prefix(&mut self, prefix: &str) -> bool {
        self.prefixes.insert(prefix.to_owned())
    }

    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}
