/*!
 * Tests for content export and keyword import
 */

use chrono::{Local, TimeZone};
use seoscore::batch::BatchItem;
use seoscore::errors::ExportError;
use seoscore::export::{ExportFormat, ExportRow, ImportFormat, export_rows, import_keywords};
use seoscore::validation::ContentValidator;

use crate::common;

#[test]
fn test_exportRow_fromBatch_shouldSkipFailedDrafts() {
    let validator = ContentValidator::new();
    let drafts = vec![common::sample_draft(), common::short_draft("Broken", &[])];
    let items = vec![
        BatchItem {
            index: 0,
            id: None,
            keywords: drafts[0].keywords.clone(),
            report: Some(validator.validate(&drafts[0]).unwrap()),
            error: None,
        },
        BatchItem {
            index: 1,
            id: None,
            keywords: Vec::new(),
            report: None,
            error: Some("Invalid input".to_string()),
        },
    ];

    let rows = ExportRow::from_batch(&drafts, &items);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, common::SAMPLE_TITLE);
    assert_eq!(rows[0].keywords, "wireless headphones");
    assert_eq!(rows[0].meta_status, "valid");
    assert_eq!(rows[0].structure_score, 100);
}

#[test]
fn test_exportRows_csv_shouldHaveHeaderAndOneLinePerRow() {
    let row = ExportRow {
        title: "Plain title".to_string(),
        keywords: "shoes".to_string(),
        meta_description: "desc".to_string(),
        body: "body".to_string(),
        seo_score: 74.0,
        readability_score: 100,
        structure_score: 90,
        meta_status: "invalid".to_string(),
    };
    let timestamp = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 1).unwrap();

    let (content, file_name) = export_rows(&[row.clone(), row], ExportFormat::Csv, &timestamp).unwrap();

    assert_eq!(file_name, "seo_contents_20251231_235901.csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Plain title,shoes,desc,body,74.00,100,90,invalid");
}

#[test]
fn test_exportRows_withUnknownFormatName_shouldBeRejectedWhenParsing() {
    let error = "xlsx".parse::<ExportFormat>().unwrap_err();

    assert!(matches!(error, ExportError::UnsupportedFormat(ref name) if name == "xlsx"));
}

#[test]
fn test_importKeywords_csvWithEscapedQuotes_shouldUnescape() {
    let keywords = import_keywords("\"say \"\"hi\"\"\",1\nplain", ImportFormat::Csv);

    assert_eq!(keywords, vec!["say \"hi\"", "plain"]);
}
