/*!
 * Integration tests for batch validation, summaries and export
 */

use anyhow::Result;
use chrono::Local;
use seoscore::batch::{BatchSummary, BatchValidator};
use seoscore::export::{ExportFormat, ExportRow, export_rows};
use seoscore::file_utils::FileManager;
use seoscore::validation::ContentValidator;

use crate::common;

#[tokio::test]
async fn test_batch_fromDirectory_shouldValidateAndSummarize() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let good = common::sample_draft().with_id("good");
    let weak = common::short_draft("Hi", &["shoes", "boots"]).with_id("weak");
    let broken = common::short_draft("No keywords", &[]).with_id("broken");
    common::create_test_file(temp_dir.path(), "a.json", &common::drafts_json(&[good, weak])?)?;
    common::create_test_file(temp_dir.path(), "b.json", &serde_json::to_string(&broken)?)?;

    let entries = FileManager::collect_drafts(temp_dir.path())?;
    let batch = BatchValidator::new(ContentValidator::new(), 2);
    let items = batch.validate_entries(entries).await;
    let summary = BatchSummary::from_items(&items);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.ranking, vec![0, 1]);
    assert_eq!(summary.score_distribution["90-100"], 1);
    assert_eq!(summary.score_distribution.values().sum::<usize>(), 2);
    assert_eq!(items[2].id.as_deref(), Some("broken"));
    assert!(items[2].error.is_some());
    Ok(())
}

#[tokio::test]
async fn test_batch_fromFile_withDraftMissingBody_shouldValidateTheRest() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let good = serde_json::to_value(common::sample_draft())?;
    let missing_body = serde_json::json!({
        "title": "No body",
        "metaDescription": "A draft without a body",
        "keywords": ["shoes"]
    });
    let json = serde_json::to_string(&vec![missing_body, good])?;
    let path = common::create_test_file(temp_dir.path(), "drafts.json", &json)?;

    let entries = FileManager::collect_drafts(&path)?;
    let items = BatchValidator::new(ContentValidator::new(), 2)
        .validate_entries(entries.clone())
        .await;
    let summary = BatchSummary::from_items(&items);
    let rows = ExportRow::from_entries(&entries, &items);

    assert_eq!(items.len(), 2);
    assert!(items[0].error.as_deref().unwrap_or_default().contains("body"));
    assert!(items[1].succeeded());
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.ranking, vec![1]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, common::SAMPLE_TITLE);
    Ok(())
}

#[tokio::test]
async fn test_batch_summary_shouldCountKeywordsAcrossDrafts() {
    let drafts = vec![
        common::short_draft("One", &["shoes", "boots"]),
        common::short_draft("Two", &["shoes"]),
        common::short_draft("Three", &["sandals", "shoes"]),
    ];

    let items = BatchValidator::new(ContentValidator::new(), 3)
        .validate_all(drafts)
        .await;
    let summary = BatchSummary::from_items(&items);

    assert_eq!(summary.keyword_frequencies[0], ("shoes".to_string(), 3));
    assert_eq!(summary.keyword_frequencies.len(), 3);
    assert!(summary.summary().contains("3/3 validated"));
}

#[tokio::test]
async fn test_batch_export_shouldWriteTimestampedCsv() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let drafts = vec![common::sample_draft(), common::short_draft("Say, \"hi\"", &["hi"])];

    let items = BatchValidator::new(ContentValidator::new(), 2)
        .validate_all(drafts.clone())
        .await;
    let rows = ExportRow::from_batch(&drafts, &items);
    let (content, file_name) = export_rows(&rows, ExportFormat::Csv, &Local::now())?;
    let path = temp_dir.path().join("exports").join(&file_name);
    FileManager::write_to_file(&path, &content)?;

    assert!(file_name.starts_with("seo_contents_"));
    assert!(file_name.ends_with(".csv"));
    let written = FileManager::read_to_string(&path)?;
    assert!(written.contains("\"Say, \"\"hi\"\"\""));
    assert!(written.contains(common::SAMPLE_TITLE));
    Ok(())
}

#[test]
fn test_batch_export_withOnlyFailures_shouldReportNoContent() {
    let drafts = vec![common::short_draft("Empty", &[])];
    let batch = BatchValidator::new(ContentValidator::new(), 1);

    let items = tokio_test::block_on(async { batch.validate_all(drafts.clone()).await });
    let rows = ExportRow::from_batch(&drafts, &items);

    assert!(rows.is_empty());
    assert!(export_rows(&rows, ExportFormat::Json, &Local::now()).is_err());
}
