/*!
 * Thresholds and weights for content validation.
 *
 * Every scoring constant lives here as a named default so alternative
 * policies (for example per-locale length bounds) can be passed to the
 * validator without touching analyzer logic.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Lowest density (percent) considered optimal
pub const DEFAULT_DENSITY_MIN: f64 = 1.0;
/// Highest density (percent) considered optimal
pub const DEFAULT_DENSITY_MAX: f64 = 3.0;

/// Average sentence length (chars) above which readability is penalised
pub const DEFAULT_MAX_AVG_SENTENCE_LEN: f64 = 50.0;
/// Average paragraph length (chars) above which readability is penalised
pub const DEFAULT_MAX_AVG_PARAGRAPH_LEN: f64 = 200.0;
/// A term is repeated when it occurs more often than this
pub const DEFAULT_REPEATED_TERM_MIN_FREQUENCY: usize = 3;
/// Terms must be longer than this (chars) to count as repeated
pub const DEFAULT_REPEATED_TERM_MIN_LENGTH: usize = 1;
/// Readability is penalised when more distinct repeated terms are found
pub const DEFAULT_MAX_REPEATED_TERMS: usize = 5;
pub const DEFAULT_LONG_SENTENCE_PENALTY: i32 = 10;
pub const DEFAULT_LONG_PARAGRAPH_PENALTY: i32 = 10;
pub const DEFAULT_REPETITION_PENALTY: i32 = 5;

/// Fewer level-2 headings than this is penalised
pub const DEFAULT_MIN_H2_HEADINGS: usize = 2;
pub const DEFAULT_MISSING_H1_PENALTY: i32 = 10;
pub const DEFAULT_FEW_H2_PENALTY: i32 = 5;
pub const DEFAULT_MISSING_IMAGE_PENALTY: i32 = 5;
pub const DEFAULT_MISSING_LIST_PENALTY: i32 = 5;

pub const DEFAULT_TITLE_MIN_LEN: usize = 10;
pub const DEFAULT_TITLE_MAX_LEN: usize = 60;
pub const DEFAULT_DESCRIPTION_MIN_LEN: usize = 120;
pub const DEFAULT_DESCRIPTION_MAX_LEN: usize = 160;

pub const DEFAULT_LENGTH_PENALTY: i32 = 20;
pub const DEFAULT_MISSING_KEYWORD_PENALTY: i32 = 30;
pub const DEFAULT_PUNCTUATION_PENALTY: i32 = 10;
/// Titles with more terminal punctuation marks than this are penalised
pub const DEFAULT_TITLE_MAX_TERMINALS: usize = 2;
/// Descriptions with more terminal punctuation marks than this are penalised
pub const DEFAULT_DESCRIPTION_MAX_TERMINALS: usize = 4;
/// Bodies shorter than this (chars) are penalised
pub const DEFAULT_MIN_BODY_LEN: usize = 800;
/// Bodies with fewer paragraphs than this are penalised
pub const DEFAULT_MIN_PARAGRAPHS: usize = 5;
/// Punctuation-to-length ratio above which the body is penalised
pub const DEFAULT_MAX_PUNCTUATION_RATIO: f64 = 0.2;
pub const DEFAULT_SHORT_BODY_PENALTY: i32 = 20;
pub const DEFAULT_FEW_PARAGRAPHS_PENALTY: i32 = 10;
pub const DEFAULT_PUNCTUATION_RATIO_PENALTY: i32 = 10;
/// Factors scoring below this produce a suggestion
pub const DEFAULT_SUGGESTION_THRESHOLD: i32 = 80;

pub const DEFAULT_TITLE_WEIGHT: f64 = 0.3;
pub const DEFAULT_DESCRIPTION_WEIGHT: f64 = 0.2;
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.5;

/// Starting value of every penalty-based score
pub const FULL_SCORE: i32 = 100;

/// Keyword density band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityThresholds {
    #[serde(default = "default_density_min")]
    pub min: f64,
    #[serde(default = "default_density_max")]
    pub max: f64,
}

fn default_density_min() -> f64 {
    DEFAULT_DENSITY_MIN
}

fn default_density_max() -> f64 {
    DEFAULT_DENSITY_MAX
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self {
            min: DEFAULT_DENSITY_MIN,
            max: DEFAULT_DENSITY_MAX,
        }
    }
}

/// Readability limits and deductions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityThresholds {
    #[serde(default = "default_max_avg_sentence_len")]
    pub max_avg_sentence_len: f64,
    #[serde(default = "default_max_avg_paragraph_len")]
    pub max_avg_paragraph_len: f64,
    #[serde(default = "default_repeated_term_min_frequency")]
    pub repeated_term_min_frequency: usize,
    #[serde(default = "default_repeated_term_min_length")]
    pub repeated_term_min_length: usize,
    #[serde(default = "default_max_repeated_terms")]
    pub max_repeated_terms: usize,
    #[serde(default = "default_long_sentence_penalty")]
    pub long_sentence_penalty: i32,
    #[serde(default = "default_long_paragraph_penalty")]
    pub long_paragraph_penalty: i32,
    #[serde(default = "default_repetition_penalty")]
    pub repetition_penalty: i32,
}

fn default_max_avg_sentence_len() -> f64 {
    DEFAULT_MAX_AVG_SENTENCE_LEN
}

fn default_max_avg_paragraph_len() -> f64 {
    DEFAULT_MAX_AVG_PARAGRAPH_LEN
}

fn default_repeated_term_min_frequency() -> usize {
    DEFAULT_REPEATED_TERM_MIN_FREQUENCY
}

fn default_repeated_term_min_length() -> usize {
    DEFAULT_REPEATED_TERM_MIN_LENGTH
}

fn default_max_repeated_terms() -> usize {
    DEFAULT_MAX_REPEATED_TERMS
}

fn default_long_sentence_penalty() -> i32 {
    DEFAULT_LONG_SENTENCE_PENALTY
}

fn default_long_paragraph_penalty() -> i32 {
    DEFAULT_LONG_PARAGRAPH_PENALTY
}

fn default_repetition_penalty() -> i32 {
    DEFAULT_REPETITION_PENALTY
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            max_avg_sentence_len: DEFAULT_MAX_AVG_SENTENCE_LEN,
            max_avg_paragraph_len: DEFAULT_MAX_AVG_PARAGRAPH_LEN,
            repeated_term_min_frequency: DEFAULT_REPEATED_TERM_MIN_FREQUENCY,
            repeated_term_min_length: DEFAULT_REPEATED_TERM_MIN_LENGTH,
            max_repeated_terms: DEFAULT_MAX_REPEATED_TERMS,
            long_sentence_penalty: DEFAULT_LONG_SENTENCE_PENALTY,
            long_paragraph_penalty: DEFAULT_LONG_PARAGRAPH_PENALTY,
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
        }
    }
}

/// Structure expectations and deductions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureThresholds {
    #[serde(default = "default_min_h2_headings")]
    pub min_h2_headings: usize,
    #[serde(default = "default_missing_h1_penalty")]
    pub missing_h1_penalty: i32,
    #[serde(default = "default_few_h2_penalty")]
    pub few_h2_penalty: i32,
    #[serde(default = "default_missing_image_penalty")]
    pub missing_image_penalty: i32,
    #[serde(default = "default_missing_list_penalty")]
    pub missing_list_penalty: i32,
}

fn default_min_h2_headings() -> usize {
    DEFAULT_MIN_H2_HEADINGS
}

fn default_missing_h1_penalty() -> i32 {
    DEFAULT_MISSING_H1_PENALTY
}

fn default_few_h2_penalty() -> i32 {
    DEFAULT_FEW_H2_PENALTY
}

fn default_missing_image_penalty() -> i32 {
    DEFAULT_MISSING_IMAGE_PENALTY
}

fn default_missing_list_penalty() -> i32 {
    DEFAULT_MISSING_LIST_PENALTY
}

impl Default for StructureThresholds {
    fn default() -> Self {
        Self {
            min_h2_headings: DEFAULT_MIN_H2_HEADINGS,
            missing_h1_penalty: DEFAULT_MISSING_H1_PENALTY,
            few_h2_penalty: DEFAULT_FEW_H2_PENALTY,
            missing_image_penalty: DEFAULT_MISSING_IMAGE_PENALTY,
            missing_list_penalty: DEFAULT_MISSING_LIST_PENALTY,
        }
    }
}

/// Title and meta description length bounds (chars, inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaThresholds {
    #[serde(default = "default_title_min_len")]
    pub title_min_len: usize,
    #[serde(default = "default_title_max_len")]
    pub title_max_len: usize,
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,
    #[serde(default = "default_description_max_len")]
    pub description_max_len: usize,
}

fn default_title_min_len() -> usize {
    DEFAULT_TITLE_MIN_LEN
}

fn default_title_max_len() -> usize {
    DEFAULT_TITLE_MAX_LEN
}

fn default_description_min_len() -> usize {
    DEFAULT_DESCRIPTION_MIN_LEN
}

fn default_description_max_len() -> usize {
    DEFAULT_DESCRIPTION_MAX_LEN
}

impl Default for MetaThresholds {
    fn default() -> Self {
        Self {
            title_min_len: DEFAULT_TITLE_MIN_LEN,
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            description_min_len: DEFAULT_DESCRIPTION_MIN_LEN,
            description_max_len: DEFAULT_DESCRIPTION_MAX_LEN,
        }
    }
}

impl MetaThresholds {
    /// Whether a title length is within bounds
    pub fn title_len_ok(&self, len: usize) -> bool {
        (self.title_min_len..=self.title_max_len).contains(&len)
    }

    /// Whether a description length is within bounds
    pub fn description_len_ok(&self, len: usize) -> bool {
        (self.description_min_len..=self.description_max_len).contains(&len)
    }
}

/// Composite score deductions and weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    #[serde(default = "default_length_penalty")]
    pub length_penalty: i32,
    #[serde(default = "default_missing_keyword_penalty")]
    pub missing_keyword_penalty: i32,
    #[serde(default = "default_punctuation_penalty")]
    pub punctuation_penalty: i32,
    #[serde(default = "default_title_max_terminals")]
    pub title_max_terminals: usize,
    #[serde(default = "default_description_max_terminals")]
    pub description_max_terminals: usize,
    #[serde(default = "default_min_body_len")]
    pub min_body_len: usize,
    #[serde(default = "default_min_paragraphs")]
    pub min_paragraphs: usize,
    #[serde(default = "default_max_punctuation_ratio")]
    pub max_punctuation_ratio: f64,
    #[serde(default = "default_short_body_penalty")]
    pub short_body_penalty: i32,
    #[serde(default = "default_few_paragraphs_penalty")]
    pub few_paragraphs_penalty: i32,
    #[serde(default = "default_punctuation_ratio_penalty")]
    pub punctuation_ratio_penalty: i32,
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: i32,
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,
    #[serde(default = "default_description_weight")]
    pub description_weight: f64,
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,
    /// Clamp readability and structure scores to 0..=100
    #[serde(default)]
    pub clamp_scores: bool,
}

fn default_length_penalty() -> i32 {
    DEFAULT_LENGTH_PENALTY
}

fn default_missing_keyword_penalty() -> i32 {
    DEFAULT_MISSING_KEYWORD_PENALTY
}

fn default_punctuation_penalty() -> i32 {
    DEFAULT_PUNCTUATION_PENALTY
}

fn default_title_max_terminals() -> usize {
    DEFAULT_TITLE_MAX_TERMINALS
}

fn default_description_max_terminals() -> usize {
    DEFAULT_DESCRIPTION_MAX_TERMINALS
}

fn default_min_body_len() -> usize {
    DEFAULT_MIN_BODY_LEN
}

fn default_min_paragraphs() -> usize {
    DEFAULT_MIN_PARAGRAPHS
}

fn default_max_punctuation_ratio() -> f64 {
    DEFAULT_MAX_PUNCTUATION_RATIO
}

fn default_short_body_penalty() -> i32 {
    DEFAULT_SHORT_BODY_PENALTY
}

fn default_few_paragraphs_penalty() -> i32 {
    DEFAULT_FEW_PARAGRAPHS_PENALTY
}

fn default_punctuation_ratio_penalty() -> i32 {
    DEFAULT_PUNCTUATION_RATIO_PENALTY
}

fn default_suggestion_threshold() -> i32 {
    DEFAULT_SUGGESTION_THRESHOLD
}

fn default_title_weight() -> f64 {
    DEFAULT_TITLE_WEIGHT
}

fn default_description_weight() -> f64 {
    DEFAULT_DESCRIPTION_WEIGHT
}

fn default_content_weight() -> f64 {
    DEFAULT_CONTENT_WEIGHT
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            length_penalty: DEFAULT_LENGTH_PENALTY,
            missing_keyword_penalty: DEFAULT_MISSING_KEYWORD_PENALTY,
            punctuation_penalty: DEFAULT_PUNCTUATION_PENALTY,
            title_max_terminals: DEFAULT_TITLE_MAX_TERMINALS,
            description_max_terminals: DEFAULT_DESCRIPTION_MAX_TERMINALS,
            min_body_len: DEFAULT_MIN_BODY_LEN,
            min_paragraphs: DEFAULT_MIN_PARAGRAPHS,
            max_punctuation_ratio: DEFAULT_MAX_PUNCTUATION_RATIO,
            short_body_penalty: DEFAULT_SHORT_BODY_PENALTY,
            few_paragraphs_penalty: DEFAULT_FEW_PARAGRAPHS_PENALTY,
            punctuation_ratio_penalty: DEFAULT_PUNCTUATION_RATIO_PENALTY,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
            title_weight: DEFAULT_TITLE_WEIGHT,
            description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            content_weight: DEFAULT_CONTENT_WEIGHT,
            clamp_scores: false,
        }
    }
}

/// Complete validation policy, immutable once handed to the validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub density: DensityThresholds,
    #[serde(default)]
    pub readability: ReadabilityThresholds,
    #[serde(default)]
    pub structure: StructureThresholds,
    #[serde(default)]
    pub meta: MetaThresholds,
    #[serde(default)]
    pub score: ScoreThresholds,
}

impl ValidationConfig {
    /// Check thresholds for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("density", self.density.min, self.density.max)?;
        check_range(
            "title length",
            self.meta.title_min_len as f64,
            self.meta.title_max_len as f64,
        )?;
        check_range(
            "description length",
            self.meta.description_min_len as f64,
            self.meta.description_max_len as f64,
        )?;

        let weights = [
            self.score.title_weight,
            self.score.description_weight,
            self.score.content_weight,
        ];
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(ConfigError::InvalidWeights(format!(
                "weights must be finite and non-negative, got {:?}",
                weights
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::InvalidWeights(
                "weights must sum to a positive value".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}
