/*!
 * Content validation and scoring engine.
 *
 * This module scores one content draft at a time:
 * - Keyword density per target keyword
 * - Readability (sentence/paragraph length, repetition)
 * - Structure (headings, images, lists, paragraphs)
 * - Meta field compliance (title and description)
 * - Weighted composite SEO score
 *
 * # Architecture
 *
 * - `config`: Thresholds, deductions and weights
 * - `density`: Keyword density analysis
 * - `readability`: Readability analysis
 * - `structure`: Structural analysis
 * - `meta`: Title and meta description checks
 * - `score`: Composite score aggregation
 * - `report`: Report types
 * - `service`: Orchestrates all analyzers
 */

pub mod config;
pub mod density;
pub mod meta;
pub mod readability;
pub mod report;
pub mod score;
pub mod service;
pub mod structure;

// Re-export main types
pub use config::ValidationConfig;
pub use density::KeywordDensityAnalyzer;
pub use meta::{MetaIssue, MetaValidator};
pub use readability::ReadabilityAnalyzer;
pub use report::{
    DensityStatus, HeadingCounts, KeywordDensity, KeywordDensityReport, MetaLengths, MetaStatus,
    MetaValidation, ReadabilityReport, ReadabilityStats, SeoFactors, SeoScore, StructureReport,
    ValidationReport, ValidationWarning,
};
pub use score::ScoreAggregator;
pub use service::ContentValidator;
pub use structure::StructureAnalyzer;
