/*!
 * End-to-end tests of the validation pipeline on complete drafts
 */

use seoscore::language_utils::ContentLanguage;
use seoscore::validation::{ContentValidator, DensityStatus, MetaStatus};
use seoscore::ContentDraft;

use crate::common;

#[test]
fn test_validate_withWellFormedDraft_shouldScoreFullMarks() {
    common::init_test_logging();
    let validator = ContentValidator::new();
    let draft = common::sample_draft();
    assert!(draft.body.chars().count() >= 900);

    let report = validator.validate(&draft).unwrap();

    assert_eq!(report.structure.score, 100);
    assert!(report.structure.suggestions.is_empty());
    assert_eq!(report.structure.heading_counts.h1, 3);
    assert_eq!(report.structure.heading_counts.h2, 2);
    assert_eq!(report.structure.heading_counts.h3, 0);
    assert_eq!(report.structure.image_count, 1);
    assert_eq!(report.structure.list_count, 1);
    assert_eq!(report.structure.paragraph_count, 6);

    assert_eq!(report.meta_validation.status, MetaStatus::Valid);
    assert!(report.meta_validation.issues.is_empty());
    assert_eq!(report.meta_validation.lengths.title, 33);
    assert_eq!(report.meta_validation.lengths.description, 141);

    assert_eq!(report.seo_score.factors.title, 100);
    assert_eq!(report.seo_score.factors.meta_description, 100);
    assert_eq!(report.seo_score.factors.content_quality, 100);
    assert_eq!(report.seo_score.total, 100.0);
    assert!(report.seo_score.suggestions.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_validate_withWellFormedDraft_shouldFlagSparseKeyword() {
    let report = ContentValidator::new().validate(&common::sample_draft()).unwrap();

    let entry = &report.keyword_density.keywords["wireless headphones"];
    assert_eq!(entry.count, 4);
    assert_eq!(entry.status, DensityStatus::Low);
    assert_eq!(report.keyword_density.status, DensityStatus::Low);
    assert_eq!(report.keyword_density.suggestions.len(), 1);
}

#[test]
fn test_validate_withWellFormedDraft_shouldPenaliseLongSentencesOnly() {
    let report = ContentValidator::new().validate(&common::sample_draft()).unwrap();

    assert_eq!(report.readability.score, 90);
    assert!(report.readability.stats.avg_sentence_len > 50.0);
    assert!(report.readability.stats.avg_paragraph_len < 200.0);
    assert_eq!(report.readability.suggestions.len(), 1);
}

#[test]
fn test_validate_reportJson_shouldUseCamelCaseFields() {
    let report = ContentValidator::new().validate(&common::sample_draft()).unwrap();

    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("keywordDensity").is_some());
    assert!(value.get("metaValidation").is_some());
    assert_eq!(value["seoScore"]["total"], 100.0);
    assert_eq!(value["metaValidation"]["status"], "valid");
}

#[test]
fn test_validate_withChineseDraft_shouldUseDictionarySegmentation() {
    let body = "# 无线耳机推荐\n\n这个无线耳机音质很好。续航也很好。\n\n## 价格\n\n无线耳机价格优惠。无线耳机正品包邮。";
    let draft = ContentDraft::new(
        "无线耳机推荐：音质与续航兼顾",
        "无线耳机选购指南",
        vec!["无线耳机".to_string()],
        body,
    )
    .with_language(ContentLanguage::GenericSegmented);

    let report = ContentValidator::new().validate(&draft).unwrap();

    assert_eq!(report.keyword_density.keywords["无线耳机"].count, 4);
    assert_eq!(report.readability.repeated_terms.get("无线耳机"), Some(&4));
    assert_eq!(report.structure.heading_counts.h1, 2);
    assert_eq!(report.structure.heading_counts.h2, 1);
    assert_eq!(report.structure.paragraph_count, 4);
}

#[test]
fn test_validate_allSuggestions_shouldCollectEveryAnalyzer() {
    let draft = common::short_draft("Hi", &["shoes"]);

    let report = ContentValidator::new().validate(&draft).unwrap();

    let all = report.all_suggestions();
    let expected = report.keyword_density.suggestions.len()
        + report.readability.suggestions.len()
        + report.structure.suggestions.len()
        + report.meta_validation.issues.len()
        + report.seo_score.suggestions.len();
    assert_eq!(all.len(), expected);
    assert!(report.structure.score < 100);
}
