/*!
 * Readability analysis for draft bodies.
 *
 * Scores a body on three signals:
 * - Average sentence length
 * - Average paragraph length
 * - Lexical repetition (terms used too often)
 */

use std::collections::BTreeMap;

use log::debug;

use crate::segmentation::Segmentation;

use super::config::{FULL_SCORE, ReadabilityThresholds};
use super::report::{ReadabilityReport, ReadabilityStats, round2};

/// Mean character length of a set of text fragments, 0 when there are none
fn mean_char_len(fragments: &[String]) -> f64 {
    if fragments.is_empty() {
        return 0.0;
    }
    let total: usize = fragments.iter().map(|f| f.chars().count()).sum();
    total as f64 / fragments.len() as f64
}

/// Readability analyzer
#[derive(Debug, Clone, Default)]
pub struct ReadabilityAnalyzer {
    thresholds: ReadabilityThresholds,
    clamp_score: bool,
}

impl ReadabilityAnalyzer {
    /// Create a new analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new analyzer with custom thresholds
    pub fn with_config(thresholds: ReadabilityThresholds, clamp_score: bool) -> Self {
        Self {
            thresholds,
            clamp_score,
        }
    }

    /// Terms occurring more often than the configured frequency
    pub fn repeated_terms(&self, words: &[String]) -> BTreeMap<String, usize> {
        let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
        for word in words {
            *frequencies.entry(word.clone()).or_insert(0) += 1;
        }

        frequencies
            .into_iter()
            .filter(|(term, count)| {
                *count > self.thresholds.repeated_term_min_frequency
                    && term.chars().count() > self.thresholds.repeated_term_min_length
            })
            .collect()
    }

    /// Analyze readability of a segmented body
    pub fn analyze(&self, segmentation: &Segmentation) -> ReadabilityReport {
        let avg_sentence_len = mean_char_len(&segmentation.sentences);
        let avg_paragraph_len = mean_char_len(&segmentation.paragraphs);
        let repeated_terms = self.repeated_terms(&segmentation.words);

        let mut score = FULL_SCORE;
        let mut suggestions = Vec::new();

        if avg_sentence_len > self.thresholds.max_avg_sentence_len {
            score -= self.thresholds.long_sentence_penalty;
            suggestions.push(format!(
                "Average sentence length is {:.1} characters; keep sentences under {:.0} characters",
                avg_sentence_len, self.thresholds.max_avg_sentence_len
            ));
        }

        if avg_paragraph_len > self.thresholds.max_avg_paragraph_len {
            score -= self.thresholds.long_paragraph_penalty;
            suggestions.push(format!(
                "Average paragraph length is {:.1} characters; split paragraphs longer than {:.0} characters",
                avg_paragraph_len, self.thresholds.max_avg_paragraph_len
            ));
        }

        if repeated_terms.len() > self.thresholds.max_repeated_terms {
            score -= self.thresholds.repetition_penalty;
            let terms: Vec<&str> = repeated_terms.keys().map(String::as_str).collect();
            suggestions.push(format!(
                "{} terms are repeated more than {} times ({}); vary the wording",
                repeated_terms.len(),
                self.thresholds.repeated_term_min_frequency,
                terms.join(", ")
            ));
        }

        if self.clamp_score {
            score = score.clamp(0, FULL_SCORE);
        }

        debug!(
            "Readability: score {}, avg sentence {:.1}, avg paragraph {:.1}, {} repeated terms",
            score,
            avg_sentence_len,
            avg_paragraph_len,
            repeated_terms.len()
        );

        ReadabilityReport {
            score,
            stats: ReadabilityStats {
                avg_sentence_len: round2(avg_sentence_len),
                avg_paragraph_len: round2(avg_paragraph_len),
            },
            repeated_terms,
            suggestions,
        }
    }
}
