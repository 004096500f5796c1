/*!
 * Composite SEO scoring.
 *
 * Blends three penalty-based factors into one weighted total:
 * - Title: length, keyword presence, terminal punctuation
 * - Meta description: length, keyword presence, terminal punctuation
 * - Content quality: body length, paragraph count, punctuation density
 */

use log::debug;

use crate::draft::ContentDraft;
use crate::segmentation::{Segmentation, count_terminals, is_punctuation};

use super::config::{FULL_SCORE, MetaThresholds, ScoreThresholds};
use super::density::contains_any_keyword;
use super::report::{SeoFactors, SeoScore, round2};

/// Share of punctuation characters in a text, 0 for empty text
pub fn punctuation_ratio(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let punctuation = text.chars().filter(|c| is_punctuation(*c)).count();
    punctuation as f64 / len as f64
}

/// Combines per-field scores into the composite score
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    meta: MetaThresholds,
    thresholds: ScoreThresholds,
}

impl ScoreAggregator {
    /// Create a new aggregator with default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new aggregator with custom policy
    pub fn with_config(meta: MetaThresholds, thresholds: ScoreThresholds) -> Self {
        Self { meta, thresholds }
    }

    /// Score the title
    pub fn title_score(&self, title: &str, keywords: &[String]) -> i32 {
        let mut score = FULL_SCORE;
        if !self.meta.title_len_ok(title.chars().count()) {
            score -= self.thresholds.length_penalty;
        }
        if !contains_any_keyword(title, keywords) {
            score -= self.thresholds.missing_keyword_penalty;
        }
        if count_terminals(title) > self.thresholds.title_max_terminals {
            score -= self.thresholds.punctuation_penalty;
        }
        score
    }

    /// Score the meta description
    pub fn meta_score(&self, description: &str, keywords: &[String]) -> i32 {
        let mut score = FULL_SCORE;
        if !self.meta.description_len_ok(description.chars().count()) {
            score -= self.thresholds.length_penalty;
        }
        if !contains_any_keyword(description, keywords) {
            score -= self.thresholds.missing_keyword_penalty;
        }
        if count_terminals(description) > self.thresholds.description_max_terminals {
            score -= self.thresholds.punctuation_penalty;
        }
        score
    }

    /// Score the body content
    pub fn content_score(&self, body: &str, paragraph_count: usize) -> i32 {
        let mut score = FULL_SCORE;
        if body.chars().count() < self.thresholds.min_body_len {
            score -= self.thresholds.short_body_penalty;
        }
        if paragraph_count < self.thresholds.min_paragraphs {
            score -= self.thresholds.few_paragraphs_penalty;
        }
        if punctuation_ratio(body) > self.thresholds.max_punctuation_ratio {
            score -= self.thresholds.punctuation_ratio_penalty;
        }
        score
    }

    /// Weighted total of three factor scores, two decimals
    pub fn weighted_total(&self, factors: &SeoFactors) -> f64 {
        round2(
            f64::from(factors.title) * self.thresholds.title_weight
                + f64::from(factors.meta_description) * self.thresholds.description_weight
                + f64::from(factors.content_quality) * self.thresholds.content_weight,
        )
    }

    /// Compute the composite score for a draft.
    ///
    /// `keywords` are the de-duplicated draft keywords and `segmentation`
    /// the body's segmentation (only its paragraphs are read).
    pub fn aggregate(
        &self,
        draft: &ContentDraft,
        keywords: &[String],
        segmentation: &Segmentation,
    ) -> SeoScore {
        let factors = SeoFactors {
            title: self.title_score(&draft.title, keywords),
            meta_description: self.meta_score(&draft.meta_description, keywords),
            content_quality: self.content_score(&draft.body, segmentation.paragraphs.len()),
        };
        let total = self.weighted_total(&factors);

        let threshold = self.thresholds.suggestion_threshold;
        let mut suggestions = Vec::new();
        if factors.title < threshold {
            suggestions.push(format!(
                "Improve the title (score {}): keep it between {} and {} characters, include a target keyword and avoid excess punctuation",
                factors.title, self.meta.title_min_len, self.meta.title_max_len
            ));
        }
        if factors.meta_description < threshold {
            suggestions.push(format!(
                "Improve the meta description (score {}): keep it between {} and {} characters and include a target keyword",
                factors.meta_description, self.meta.description_min_len, self.meta.description_max_len
            ));
        }
        if factors.content_quality < threshold {
            suggestions.push(format!(
                "Improve content quality (score {}): write at least {} characters across {} or more paragraphs",
                factors.content_quality, self.thresholds.min_body_len, self.thresholds.min_paragraphs
            ));
        }

        debug!(
            "SEO score: total {:.2} (title {}, description {}, content {})",
            total, factors.title, factors.meta_description, factors.content_quality
        );

        SeoScore {
            total,
            factors,
            suggestions,
        }
    }
}
