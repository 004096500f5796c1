/*!
 * Validation report types.
 *
 * A report is produced fresh for every validated draft and owned by the
 * caller. All maps are ordered so that serializing the same report twice
 * yields identical bytes.
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keyword density classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityStatus {
    /// Within the recommended band
    Optimal,
    /// Above the band (keyword stuffing)
    High,
    /// Below the band
    Low,
}

impl std::fmt::Display for DensityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Optimal => "optimal",
            Self::High => "high",
            Self::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// Density figures for one keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    /// Non-overlapping occurrences in the body
    pub count: usize,
    /// Occurrences per 100 body characters, two decimals
    pub density: f64,
    pub status: DensityStatus,
}

/// Keyword density results for a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensityReport {
    pub keywords: BTreeMap<String, KeywordDensity>,
    /// Aggregate status, `high` taking precedence over `low`
    pub status: DensityStatus,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityStats {
    pub avg_sentence_len: f64,
    pub avg_paragraph_len: f64,
}

/// Readability results for a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Penalty-based score starting at 100, unclamped unless configured
    pub score: i32,
    pub stats: ReadabilityStats,
    pub repeated_terms: BTreeMap<String, usize>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// Structure results for a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub score: i32,
    pub heading_counts: HeadingCounts,
    pub paragraph_count: usize,
    pub image_count: usize,
    pub list_count: usize,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaStatus {
    Valid,
    Invalid,
}

/// Character lengths of the meta fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaLengths {
    pub title: usize,
    pub description: usize,
}

/// Title and meta description compliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaValidation {
    pub status: MetaStatus,
    pub issues: Vec<String>,
    pub lengths: MetaLengths,
}

/// Sub-scores feeding the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoFactors {
    pub title: i32,
    pub meta_description: i32,
    pub content_quality: i32,
}

/// Weighted composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Weighted total, two decimals
    pub total: f64,
    pub factors: SeoFactors,
    pub suggestions: Vec<String>,
}

/// Non-fatal notice about degenerate input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl ValidationWarning {
    /// Warning for an empty text field
    pub fn degenerate_input(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} is empty; metrics computed on empty input", field),
        }
    }
}

/// Complete quality report for one draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub keyword_density: KeywordDensityReport,
    pub readability: ReadabilityReport,
    pub structure: StructureReport,
    pub meta_validation: MetaValidation,
    pub seo_score: SeoScore,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Every suggestion and issue across all analyzers, in pipeline order
    pub fn all_suggestions(&self) -> Vec<String> {
        self.keyword_density
            .suggestions
            .iter()
            .chain(&self.readability.suggestions)
            .chain(&self.structure.suggestions)
            .chain(&self.meta_validation.issues)
            .chain(&self.seo_score.suggestions)
            .cloned()
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "SEO score {:.2} (title {}, description {}, content {}), readability {}, structure {}, meta {}, density {}",
            self.seo_score.total,
            self.seo_score.factors.title,
            self.seo_score.factors.meta_description,
            self.seo_score.factors.content_quality,
            self.readability.score,
            self.structure.score,
            match self.meta_validation.status {
                MetaStatus::Valid => "valid",
                MetaStatus::Invalid => "invalid",
            },
            self.keyword_density.status
        )
    }
}
