//! Generation configuration value object.

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;

use super::CharacterClass;

/// Everything the generator needs to know about one password request.
///
/// Built once by the caller and only read afterwards. Minimums for classes
/// that are not enabled are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: NonZeroUsize,
    pub enabled_classes: BTreeSet<CharacterClass>,
    pub minimum_per_class: BTreeMap<CharacterClass, usize>,
    pub exclude_ambiguous: bool,
    pub exclude_similar: bool,
    pub custom_excluded_chars: BTreeSet<char>,
}

impl GenerationConfig {
    /// All four classes enabled, no minimums, no exclusions.
    pub fn new(length: NonZeroUsize) -> Self {
        Self {
            length,
            enabled_classes: CharacterClass::ALL.into_iter().collect(),
            minimum_per_class: BTreeMap::new(),
            exclude_ambiguous: false,
            exclude_similar: false,
            custom_excluded_chars: BTreeSet::new(),
        }
    }

    pub fn with_classes(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.enabled_classes = classes.into_iter().collect();
        self
    }

    pub fn with_minimum(mut self, class: CharacterClass, count: usize) -> Self {
        self.minimum_per_class.insert(class, count);
        self
    }

    pub fn with_exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn with_exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    pub fn with_excluded_chars(mut self, chars: &str) -> Self {
        self.custom_excluded_chars = chars.chars().collect();
        self
    }

    pub fn length(&self) -> usize {
        self.length.get()
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled_classes.contains(&class)
    }

    /// Minimum for `class`, or 0 when the class is disabled or unset.
    pub fn minimum(&self, class: CharacterClass) -> usize {
        if !self.is_enabled(class) {
            return 0;
        }
        self.minimum_per_class.get(&class).copied().unwrap_or(0)
    }

    /// Sum of minimums over enabled classes, saturating at `usize::MAX`.
    pub fn total_minimum(&self) -> usize {
        self.enabled_classes
            .iter()
            .map(|&c| self.minimum(c))
            .fold(0, usize::saturating_add)
    }
}
