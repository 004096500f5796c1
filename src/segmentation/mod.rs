/*!
 * Text segmentation for content validation.
 *
 * This module cuts raw draft text into the three units every analyzer
 * works on:
 * - Paragraphs (blank-line separated blocks)
 * - Sentences (split on Latin and CJK terminal punctuation)
 * - Words (strategy depends on the draft language)
 *
 * # Architecture
 *
 * - `whitespace`: Word splitting for space-delimited scripts
 * - `dictionary`: Forward maximum matching for unsegmented scripts
 * - `registry`: Strategy lookup keyed by `ContentLanguage`
 */

pub mod dictionary;
pub mod registry;
pub mod whitespace;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use dictionary::DictionarySegmenter;
pub use registry::SegmenterRegistry;
pub use whitespace::WhitespaceSegmenter;

/// Sentence-terminal punctuation, Latin and full-width CJK
pub const SENTENCE_TERMINALS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Regex for blank-line paragraph boundaries
static PARAGRAPH_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t\r]*\n").expect("Invalid paragraph break regex")
});

/// Words, sentences and paragraphs of one text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segmentation {
    /// Word tokens in reading order
    pub words: Vec<String>,
    /// Non-empty trimmed sentences
    pub sentences: Vec<String>,
    /// Non-empty trimmed paragraphs
    pub paragraphs: Vec<String>,
}

/// A word segmentation strategy.
///
/// Implementations must be pure: the same text always yields the same words.
pub trait Segmenter: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Split text into word tokens
    fn words(&self, text: &str) -> Vec<String>;

    /// Split text into words, sentences and paragraphs
    fn segment(&self, text: &str) -> Segmentation {
        Segmentation {
            words: self.words(text),
            sentences: split_sentences(text),
            paragraphs: split_paragraphs(text),
        }
    }
}

/// Split text into paragraphs on blank lines, dropping empty ones
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    PARAGRAPH_BREAK_REGEX
        .split(&normalized)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences on terminal punctuation, dropping empty fragments
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(|c: char| SENTENCE_TERMINALS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count sentence-terminal punctuation marks in a text
pub fn count_terminals(text: &str) -> usize {
    text.chars().filter(|c| SENTENCE_TERMINALS.contains(c)).count()
}

/// Whether a character counts as punctuation, ASCII or CJK
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '。' | '！' | '？' | '，' | '、' | '；' | '：' | '“' | '”' | '‘' | '’' | '（' | '）'
                | '《' | '》' | '【' | '】' | '…' | '—' | '·'
        )
}
