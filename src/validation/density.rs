/*!
 * Keyword density analysis.
 *
 * Counts how often each target keyword occurs in the body and expresses it
 * as a percentage of the body's character count. Matching is literal,
 * case-insensitive and non-overlapping.
 */

use std::collections::BTreeMap;

use log::debug;

use super::config::DensityThresholds;
use super::report::{DensityStatus, KeywordDensity, KeywordDensityReport, round2};

/// Count non-overlapping, case-insensitive occurrences of `needle`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(needle.as_str()).count()
}

/// Whether any keyword occurs in `text`, ignoring case
pub fn contains_any_keyword(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| text.contains(k.as_str()))
}

/// Keyword density analyzer
#[derive(Debug, Clone, Default)]
pub struct KeywordDensityAnalyzer {
    thresholds: DensityThresholds,
}

impl KeywordDensityAnalyzer {
    /// Create a new analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new analyzer with custom thresholds
    pub fn with_config(thresholds: DensityThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a single density value
    pub fn classify(&self, density: f64) -> DensityStatus {
        if density > self.thresholds.max {
            DensityStatus::High
        } else if density < self.thresholds.min {
            DensityStatus::Low
        } else {
            DensityStatus::Optimal
        }
    }

    /// Analyze keyword density over `body`.
    ///
    /// `keywords` should already be de-duplicated; suggestions follow its order.
    pub fn analyze(&self, body: &str, keywords: &[String]) -> KeywordDensityReport {
        let body_len = body.chars().count();
        let mut entries = BTreeMap::new();
        let mut suggestions = Vec::new();

        for keyword in keywords {
            let count = count_occurrences(body, keyword);
            let density = if body_len == 0 {
                0.0
            } else {
                round2(count as f64 / body_len as f64 * 100.0)
            };
            let status = self.classify(density);

            match status {
                DensityStatus::High => suggestions.push(format!(
                    "Keyword '{}' density is {:.2}%, above the recommended {:.1}%-{:.1}%; reduce its usage",
                    keyword, density, self.thresholds.min, self.thresholds.max
                )),
                DensityStatus::Low => suggestions.push(format!(
                    "Keyword '{}' density is {:.2}%, below the recommended {:.1}%-{:.1}%; use it more often",
                    keyword, density, self.thresholds.min, self.thresholds.max
                )),
                DensityStatus::Optimal => {}
            }

            entries.insert(keyword.clone(), KeywordDensity { count, density, status });
        }

        let status = if entries.values().any(|e| e.status == DensityStatus::High) {
            DensityStatus::High
        } else if entries.values().any(|e| e.status == DensityStatus::Low) {
            DensityStatus::Low
        } else {
            DensityStatus::Optimal
        };

        debug!(
            "Keyword density: {} keywords over {} chars, status {}",
            entries.len(),
            body_len,
            status
        );

        KeywordDensityReport {
            keywords: entries,
            status,
            suggestions,
        }
    }
}
