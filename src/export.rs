/*!
 * Export of validated content and import of keyword lists.
 *
 * Export renders one row per validated draft as CSV or JSON, named with a
 * timestamp. Import reads keyword lists from CSV (first column) or plain
 * text (one keyword per line).
 */

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::batch::BatchItem;
use crate::draft::{ContentDraft, DraftEntry};
use crate::errors::ExportError;
use crate::validation::MetaStatus;

/// Output format for exported rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Input format for keyword lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Txt,
}

impl std::str::FromStr for ImportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" => Ok(Self::Txt),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// One exported draft with its headline scores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub title: String,
    pub keywords: String,
    pub meta_description: String,
    pub body: String,
    pub seo_score: f64,
    pub readability_score: i32,
    pub structure_score: i32,
    pub meta_status: String,
}

const CSV_HEADER: [&str; 8] = [
    "title",
    "keywords",
    "meta_description",
    "body",
    "seo_score",
    "readability_score",
    "structure_score",
    "meta_status",
];

impl ExportRow {
    /// Build rows from drafts and their batch results, skipping failed drafts
    pub fn from_batch(drafts: &[ContentDraft], items: &[BatchItem]) -> Vec<Self> {
        Self::collect_rows(items, |index| drafts.get(index))
    }

    /// Build rows from loaded draft entries and their batch results
    pub fn from_entries(entries: &[DraftEntry], items: &[BatchItem]) -> Vec<Self> {
        Self::collect_rows(items, |index| entries.get(index)?.as_ref().ok())
    }

    fn collect_rows<'a>(
        items: &[BatchItem],
        draft_at: impl Fn(usize) -> Option<&'a ContentDraft>,
    ) -> Vec<Self> {
        items
            .iter()
            .filter_map(|item| {
                let report = item.report.as_ref()?;
                let draft = draft_at(item.index)?;
                Some(Self {
                    title: draft.title.clone(),
                    keywords: draft.keywords.join(","),
                    meta_description: draft.meta_description.clone(),
                    body: draft.body.clone(),
                    seo_score: report.seo_score.total,
                    readability_score: report.readability.score,
                    structure_score: report.structure.score,
                    meta_status: match report.meta_validation.status {
                        MetaStatus::Valid => "valid".to_string(),
                        MetaStatus::Invalid => "invalid".to_string(),
                    },
                })
            })
            .collect()
    }

    fn csv_fields(&self) -> [String; 8] {
        [
            self.title.clone(),
            self.keywords.clone(),
            self.meta_description.clone(),
            self.body.clone(),
            format!("{:.2}", self.seo_score),
            self.readability_score.to_string(),
            self.structure_score.to_string(),
            self.meta_status.clone(),
        ]
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_csv_field(f.as_ref())).collect();
    escaped.join(",")
}

/// Export file name for a format and timestamp
pub fn export_filename(format: ExportFormat, timestamp: &DateTime<Local>) -> String {
    format!(
        "seo_contents_{}.{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Render rows in `format`, returning `(content, file_name)`
pub fn export_rows(
    rows: &[ExportRow],
    format: ExportFormat,
    timestamp: &DateTime<Local>,
) -> Result<(String, String), ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NoContent);
    }

    let content = match format {
        ExportFormat::Csv => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(csv_line(&CSV_HEADER));
            for row in rows {
                lines.push(csv_line(&row.csv_fields()));
            }
            let mut content = lines.join("\r\n");
            content.push_str("\r\n");
            content
        }
        ExportFormat::Json => serde_json::to_string_pretty(rows)?,
    };

    Ok((content, export_filename(format, timestamp)))
}

/// Split CSV text into records of fields.
///
/// Quoted fields may hold delimiters, doubled quotes and line breaks.
fn parse_csv_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    records
}

/// Read a keyword list; blank entries are skipped
pub fn import_keywords(content: &str, format: ImportFormat) -> Vec<String> {
    let keywords: Vec<String> = match format {
        ImportFormat::Csv => parse_csv_records(content)
            .into_iter()
            .filter_map(|record| record.into_iter().next())
            .collect(),
        ImportFormat::Txt => content.lines().map(str::to_string).collect(),
    };

    keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}
