/*!
 * Structural analysis of draft bodies.
 *
 * Counts simplified Markdown structure:
 * - Headings (`# `, `## `, `### ` at line start; a deeper marker also
 *   counts toward every shallower level it textually starts with)
 * - Image references (`![alt](url)`)
 * - Bullet list items (`- ` or `* ` at line start)
 * - Non-blank paragraphs
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::segmentation::Segmentation;

use super::config::{FULL_SCORE, StructureThresholds};
use super::report::{HeadingCounts, StructureReport};

/// Regex for lines carrying at least a level-1 marker
static H1_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#+[ \t]").expect("Invalid h1 regex")
});

/// Regex for lines carrying at least a level-2 marker
static H2_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^##+[ \t]").expect("Invalid h2 regex")
});

/// Regex for lines carrying at least a level-3 marker
static H3_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^###+[ \t]").expect("Invalid h3 regex")
});

/// Regex for image references like ![alt](url)
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[[^\]\n]*\]\([^)\n]*\)").expect("Invalid image regex")
});

/// Regex for bullet list items
static LIST_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*][ \t]").expect("Invalid list item regex")
});

/// Structure analyzer
#[derive(Debug, Clone, Default)]
pub struct StructureAnalyzer {
    thresholds: StructureThresholds,
    clamp_score: bool,
}

impl StructureAnalyzer {
    /// Create a new analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new analyzer with custom thresholds
    pub fn with_config(thresholds: StructureThresholds, clamp_score: bool) -> Self {
        Self {
            thresholds,
            clamp_score,
        }
    }

    /// Count headings per level. Levels overlap: `### x` counts as h1, h2 and h3
    pub fn count_headings(body: &str) -> HeadingCounts {
        HeadingCounts {
            h1: H1_REGEX.find_iter(body).count(),
            h2: H2_REGEX.find_iter(body).count(),
            h3: H3_REGEX.find_iter(body).count(),
        }
    }

    /// Count image references
    pub fn count_images(body: &str) -> usize {
        IMAGE_REGEX.find_iter(body).count()
    }

    /// Count bullet list items
    pub fn count_list_items(body: &str) -> usize {
        LIST_ITEM_REGEX.find_iter(body).count()
    }

    /// Analyze the structure of a body and its segmentation
    pub fn analyze(&self, body: &str, segmentation: &Segmentation) -> StructureReport {
        let heading_counts = Self::count_headings(body);
        let image_count = Self::count_images(body);
        let list_count = Self::count_list_items(body);
        let paragraph_count = segmentation.paragraphs.len();

        let mut score = FULL_SCORE;
        let mut suggestions = Vec::new();

        if heading_counts.h1 == 0 {
            score -= self.thresholds.missing_h1_penalty;
            suggestions.push("Add a level-1 heading (# Heading) as the main title".to_string());
        }

        if heading_counts.h2 < self.thresholds.min_h2_headings {
            score -= self.thresholds.few_h2_penalty;
            suggestions.push(format!(
                "Add more level-2 subheadings (## Subheading): found {}, expected at least {}",
                heading_counts.h2, self.thresholds.min_h2_headings
            ));
        }

        if image_count == 0 {
            score -= self.thresholds.missing_image_penalty;
            suggestions.push("Add at least one image (![alt text](url)) to illustrate the content".to_string());
        }

        if list_count == 0 {
            score -= self.thresholds.missing_list_penalty;
            suggestions.push("Add a bullet list (- item) to break up dense text".to_string());
        }

        if self.clamp_score {
            score = score.clamp(0, FULL_SCORE);
        }

        debug!(
            "Structure: score {}, headings {}/{}/{}, {} paragraphs, {} images, {} list items",
            score,
            heading_counts.h1,
            heading_counts.h2,
            heading_counts.h3,
            paragraph_count,
            image_count,
            list_count
        );

        StructureReport {
            score,
            heading_counts,
            paragraph_count,
            image_count,
            list_count,
            suggestions,
        }
    }
}
