/*!
 * Tests for the analyzers and the validation service
 */

use seoscore::segmentation::{Segmenter, WhitespaceSegmenter};
use seoscore::validation::config::{DensityThresholds, StructureThresholds};
use seoscore::validation::{
    ContentValidator, DensityStatus, KeywordDensityAnalyzer, MetaStatus, MetaValidator,
    ReadabilityAnalyzer, ScoreAggregator, StructureAnalyzer, ValidationConfig,
};
use seoscore::ContentDraft;

use crate::common;

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Pad `text` with spaces to exactly `len` chars
fn padded(text: &str, len: usize) -> String {
    format!("{:<width$}", text, width = len)
}

#[test]
fn test_density_withThreeHitsInHundredChars_shouldBeOptimal() {
    let body = padded("shoes and shoes and more shoes", 100);

    let report = KeywordDensityAnalyzer::new().analyze(&body, &keywords(&["shoes"]));

    let entry = &report.keywords["shoes"];
    assert_eq!(entry.count, 3);
    assert_eq!(entry.density, 3.0);
    assert_eq!(entry.status, DensityStatus::Optimal);
    assert!(report.suggestions.is_empty());
}

#[test]
fn test_density_withCustomBand_shouldReclassify() {
    let analyzer = KeywordDensityAnalyzer::with_config(DensityThresholds { min: 0.5, max: 1.5 });
    let body = padded("shoes shoes", 100);

    let report = analyzer.analyze(&body, &keywords(&["shoes"]));

    assert_eq!(report.keywords["shoes"].status, DensityStatus::High);
    assert_eq!(report.status, DensityStatus::High);
    assert_eq!(report.suggestions.len(), 1);
}

#[test]
fn test_density_withMultiWordKeyword_shouldMatchIgnoringCase() {
    let body = padded("Wireless Headphones beat wired ones. wireless headphones rule.", 200);

    let report = KeywordDensityAnalyzer::new().analyze(&body, &keywords(&["wireless headphones"]));

    assert_eq!(report.keywords["wireless headphones"].count, 2);
    assert_eq!(report.keywords["wireless headphones"].density, 1.0);
}

#[test]
fn test_readability_withRepetitiveText_shouldListRepeatedTerms() {
    let text = "shoes shoes shoes shoes. boots boots boots.";
    let segmentation = WhitespaceSegmenter::new().segment(text);

    let report = ReadabilityAnalyzer::new().analyze(&segmentation);

    assert_eq!(report.repeated_terms.len(), 1);
    assert_eq!(report.repeated_terms["shoes"], 4);
    assert_eq!(report.score, 100);
}

#[test]
fn test_structure_withoutHeadings_shouldDeductTenAndSuggest() {
    let body = "Intro text\n![alt](a.png)\n- item";
    let segmentation = WhitespaceSegmenter::new().segment(body);

    let report = StructureAnalyzer::new().analyze(body, &segmentation);

    assert_eq!(report.heading_counts.h1, 0);
    assert_eq!(report.score, 85);
    assert_eq!(report.suggestions.len(), 2);
    assert!(report.suggestions[0].contains("level-1 heading"));
}

#[test]
fn test_structure_withSubheadingsOnly_shouldCountThemAsH1() {
    let body = "## One\n### Two\n![alt](a.png)\n- item";
    let segmentation = WhitespaceSegmenter::new().segment(body);

    let report = StructureAnalyzer::new().analyze(body, &segmentation);

    assert_eq!(report.heading_counts.h1, 2);
    assert_eq!(report.heading_counts.h2, 2);
    assert_eq!(report.heading_counts.h3, 1);
    assert_eq!(report.score, 100);
}

#[test]
fn test_structure_withCustomPenalties_shouldUseThem() {
    let thresholds = StructureThresholds {
        missing_image_penalty: 40,
        missing_list_penalty: 40,
        ..Default::default()
    };
    let body = "# Title\n## One\n## Two";
    let segmentation = WhitespaceSegmenter::new().segment(body);

    let report = StructureAnalyzer::with_config(thresholds, false).analyze(body, &segmentation);

    assert_eq!(report.score, 20);
}

#[test]
fn test_meta_withHundredCharDescription_shouldReportOneLengthIssue() {
    let description = padded("Great shoes for everyday running", 100);

    let validation = MetaValidator::new().validate("Running shoes guide", &description, &keywords(&["shoes"]));

    assert_eq!(validation.status, MetaStatus::Invalid);
    assert_eq!(validation.issues.len(), 1);
    assert_eq!(
        validation.issues[0],
        "Description length 100 is below the minimum of 120 characters"
    );
    assert_eq!(validation.lengths.description, 100);
}

#[test]
fn test_score_withShortTitleWithoutKeyword_shouldBeAtMostFifty() {
    let aggregator = ScoreAggregator::new();

    assert!(aggregator.title_score("Hello", &keywords(&["shoes"])) <= 50);
}

#[test]
fn test_service_withClampEnabled_shouldClampStructureScore() {
    let mut config = ValidationConfig::default();
    config.score.clamp_scores = true;
    config.structure.missing_h1_penalty = 200;
    let validator = ContentValidator::with_config(config);

    let report = validator
        .validate(&ContentDraft::new("Hi", "Short", keywords(&["shoes"]), "Tiny."))
        .unwrap();

    assert_eq!(report.structure.score, 0);
    assert!(report.readability.score >= 0);
}

#[test]
fn test_service_withUnclampedDefaults_shouldAllowNegativeStructureScore() {
    let mut config = ValidationConfig::default();
    config.structure.missing_h1_penalty = 200;
    let validator = ContentValidator::with_config(config);

    let report = validator.validate(&common::short_draft("Title", &["shoes"])).unwrap();

    assert!(report.structure.score < 0);
}

#[test]
fn test_service_withSameDraftTwice_shouldProduceEqualReports() {
    let validator = ContentValidator::new();
    let draft = common::sample_draft();

    assert_eq!(validator.validate(&draft).unwrap(), validator.validate(&draft).unwrap());
}

#[test]
fn test_service_validateJson_withMissingTitle_shouldFail() {
    let validator = ContentValidator::new();

    let result = validator.validate_json(r#"{"metaDescription": "d", "keywords": ["k"], "body": "b"}"#);

    assert!(result.is_err());
}
