/*!
 * Validation service that orchestrates all analyzers.
 *
 * This module provides a unified interface for scoring a content draft:
 * input checks, segmentation, the four analyzers and the composite score.
 */

use log::{debug, warn};

use crate::draft::ContentDraft;
use crate::errors::{ConfigError, ValidationError};
use crate::segmentation::SegmenterRegistry;

use super::config::ValidationConfig;
use super::density::KeywordDensityAnalyzer;
use super::meta::MetaValidator;
use super::readability::ReadabilityAnalyzer;
use super::report::{ValidationReport, ValidationWarning};
use super::score::ScoreAggregator;
use super::structure::StructureAnalyzer;

/// Content validator for generated drafts.
///
/// Stateless between calls: validating the same draft twice yields equal
/// reports, and one validator can be shared across threads.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    config: ValidationConfig,
    registry: SegmenterRegistry,
    density_analyzer: KeywordDensityAnalyzer,
    readability_analyzer: ReadabilityAnalyzer,
    structure_analyzer: StructureAnalyzer,
    meta_validator: MetaValidator,
    score_aggregator: ScoreAggregator,
}

impl ContentValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        let clamp = config.score.clamp_scores;

        Self {
            density_analyzer: KeywordDensityAnalyzer::with_config(config.density.clone()),
            readability_analyzer: ReadabilityAnalyzer::with_config(config.readability.clone(), clamp),
            structure_analyzer: StructureAnalyzer::with_config(config.structure.clone(), clamp),
            meta_validator: MetaValidator::with_config(config.meta.clone()),
            score_aggregator: ScoreAggregator::with_config(config.meta.clone(), config.score.clone()),
            registry: SegmenterRegistry::new(),
            config,
        }
    }

    /// Create a validator after checking the configuration
    pub fn try_with_config(config: ValidationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Replace the segmenter registry
    pub fn with_registry(mut self, registry: SegmenterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a draft and build its report
    pub fn validate(&self, draft: &ContentDraft) -> Result<ValidationReport, ValidationError> {
        draft.check()?;

        let keywords = draft.unique_keywords();
        let warnings = Self::degenerate_input_warnings(draft);
        for warning in &warnings {
            warn!("{}", warning.message);
        }

        let segmentation = self.registry.segment(&draft.body, draft.language);

        let keyword_density = self.density_analyzer.analyze(&draft.body, &keywords);
        let readability = self.readability_analyzer.analyze(&segmentation);
        let structure = self.structure_analyzer.analyze(&draft.body, &segmentation);
        let meta_validation = self
            .meta_validator
            .validate(&draft.title, &draft.meta_description, &keywords);
        let seo_score = self.score_aggregator.aggregate(draft, &keywords, &segmentation);

        let report = ValidationReport {
            keyword_density,
            readability,
            structure,
            meta_validation,
            seo_score,
            warnings,
        };

        debug!("Validation complete{}: {}", draft_label(draft), report.summary());

        Ok(report)
    }

    /// Parse a JSON draft and validate it
    pub fn validate_json(&self, json: &str) -> Result<ValidationReport, ValidationError> {
        let draft = ContentDraft::from_json(json)?;
        self.validate(&draft)
    }

    fn degenerate_input_warnings(draft: &ContentDraft) -> Vec<ValidationWarning> {
        [
            ("title", draft.title.as_str()),
            ("metaDescription", draft.meta_description.as_str()),
            ("body", draft.body.as_str()),
        ]
        .iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(field, _)| ValidationWarning::degenerate_input(field))
        .collect()
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn draft_label(draft: &ContentDraft) -> String {
    match &draft.id {
        Some(id) => format!(" for '{}'", id),
        None => String::new(),
    }
}
