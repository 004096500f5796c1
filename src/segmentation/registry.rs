/*!
 * Segmenter registry keyed by content language.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::language_utils::ContentLanguage;

use super::{DictionarySegmenter, Segmentation, Segmenter, WhitespaceSegmenter};

/// Maps each content language to its word segmentation strategy
#[derive(Clone)]
pub struct SegmenterRegistry {
    strategies: HashMap<ContentLanguage, Arc<dyn Segmenter>>,
    fallback: Arc<dyn Segmenter>,
}

impl SegmenterRegistry {
    /// Create a registry with the built-in strategies
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ContentLanguage::SpaceDelimited, Arc::new(WhitespaceSegmenter::new()));
        registry.register(ContentLanguage::GenericSegmented, Arc::new(DictionarySegmenter::new()));
        registry
    }

    /// Create a registry where every language uses whitespace splitting
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Arc::new(WhitespaceSegmenter::new()),
        }
    }

    /// Register or replace the strategy for a language
    pub fn register(&mut self, language: ContentLanguage, segmenter: Arc<dyn Segmenter>) {
        self.strategies.insert(language, segmenter);
    }

    /// Strategy for a language, falling back to whitespace splitting
    pub fn get(&self, language: ContentLanguage) -> &dyn Segmenter {
        self.strategies
            .get(&language)
            .map(|s| &**s)
            .unwrap_or(&*self.fallback)
    }

    /// Segment text with the strategy registered for `language`
    pub fn segment(&self, text: &str, language: ContentLanguage) -> Segmentation {
        let segmenter = self.get(language);
        let segmentation = segmenter.segment(text);
        debug!(
            "Segmented {} chars with {}: {} words, {} sentences, {} paragraphs",
            text.chars().count(),
            segmenter.name(),
            segmentation.words.len(),
            segmentation.sentences.len(),
            segmentation.paragraphs.len()
        );
        segmentation
    }
}

impl Default for SegmenterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SegmenterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<(String, &'static str)> = self
            .strategies
            .iter()
            .map(|(lang, s)| (lang.to_string(), s.name()))
            .collect();
        names.sort();
        f.debug_struct("SegmenterRegistry")
            .field("strategies", &names)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
