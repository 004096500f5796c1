/*!
 * Whitespace word segmentation for space-delimited scripts.
 */

use super::Segmenter;

/// Splits on whitespace and strips punctuation hugging each token
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl WhitespaceSegmenter {
    /// Create a new whitespace segmenter
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}
