/*!
 * Meta field validation.
 *
 * Checks the title and meta description against length bounds and
 * verifies that each mentions at least one target keyword.
 */

use log::debug;

use super::config::MetaThresholds;
use super::density::contains_any_keyword;
use super::report::{MetaLengths, MetaStatus, MetaValidation};

/// Types of meta field issues
#[derive(Debug, Clone, PartialEq)]
pub enum MetaIssue {
    /// Title shorter than the minimum
    TitleTooShort { len: usize, min: usize },
    /// Title longer than the maximum
    TitleTooLong { len: usize, max: usize },
    /// Description shorter than the minimum
    DescriptionTooShort { len: usize, min: usize },
    /// Description longer than the maximum
    DescriptionTooLong { len: usize, max: usize },
    /// No keyword in the title
    TitleMissingKeyword,
    /// No keyword in the description
    DescriptionMissingKeyword,
}

impl std::fmt::Display for MetaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaIssue::TitleTooShort { len, min } => {
                write!(f, "Title length {} is below the minimum of {} characters", len, min)
            }
            MetaIssue::TitleTooLong { len, max } => {
                write!(f, "Title length {} exceeds the maximum of {} characters", len, max)
            }
            MetaIssue::DescriptionTooShort { len, min } => {
                write!(f, "Description length {} is below the minimum of {} characters", len, min)
            }
            MetaIssue::DescriptionTooLong { len, max } => {
                write!(f, "Description length {} exceeds the maximum of {} characters", len, max)
            }
            MetaIssue::TitleMissingKeyword => write!(f, "title missing keyword"),
            MetaIssue::DescriptionMissingKeyword => write!(f, "description missing keyword"),
        }
    }
}

/// Validator for title and meta description
#[derive(Debug, Clone, Default)]
pub struct MetaValidator {
    thresholds: MetaThresholds,
}

impl MetaValidator {
    /// Create a new validator with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom bounds
    pub fn with_config(thresholds: MetaThresholds) -> Self {
        Self { thresholds }
    }

    /// Collect issues for a title and description
    pub fn issues(&self, title: &str, description: &str, keywords: &[String]) -> Vec<MetaIssue> {
        let title_len = title.chars().count();
        let description_len = description.chars().count();
        let mut issues = Vec::new();

        if title_len < self.thresholds.title_min_len {
            issues.push(MetaIssue::TitleTooShort {
                len: title_len,
                min: self.thresholds.title_min_len,
            });
        } else if title_len > self.thresholds.title_max_len {
            issues.push(MetaIssue::TitleTooLong {
                len: title_len,
                max: self.thresholds.title_max_len,
            });
        }

        if description_len < self.thresholds.description_min_len {
            issues.push(MetaIssue::DescriptionTooShort {
                len: description_len,
                min: self.thresholds.description_min_len,
            });
        } else if description_len > self.thresholds.description_max_len {
            issues.push(MetaIssue::DescriptionTooLong {
                len: description_len,
                max: self.thresholds.description_max_len,
            });
        }

        if !contains_any_keyword(title, keywords) {
            issues.push(MetaIssue::TitleMissingKeyword);
        }

        if !contains_any_keyword(description, keywords) {
            issues.push(MetaIssue::DescriptionMissingKeyword);
        }

        issues
    }

    /// Validate title and description
    pub fn validate(&self, title: &str, description: &str, keywords: &[String]) -> MetaValidation {
        let issues = self.issues(title, description, keywords);
        let status = if issues.is_empty() {
            MetaStatus::Valid
        } else {
            MetaStatus::Invalid
        };

        debug!("Meta validation: {:?} with {} issues", status, issues.len());

        MetaValidation {
            status,
            issues: issues.iter().map(ToString::to_string).collect(),
            lengths: MetaLengths {
                title: title.chars().count(),
                description: description.chars().count(),
            },
        }
    }
}
