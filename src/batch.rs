/*!
 * Batch validation of many drafts.
 *
 * Drafts are independent, so a batch is validated with a bounded number of
 * drafts in flight at once. A failing draft is recorded in its result slot
 * and never aborts the rest of the batch.
 */

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::draft::{ContentDraft, DraftEntry};
use crate::validation::report::round2;
use crate::validation::{ContentValidator, ValidationReport};

/// Default number of drafts validated concurrently
pub const DEFAULT_MAX_CONCURRENT_VALIDATIONS: usize = 5;

/// Score distribution bucket labels, highest first
pub const SCORE_BUCKETS: [&str; 5] = ["90-100", "80-89", "70-79", "60-69", "below-60"];

/// Number of keywords kept in the summary frequency table
const TOP_KEYWORDS: usize = 10;

/// Result of validating one draft of a batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    /// Position of the draft in the input
    pub index: usize,
    /// Caller-side identifier, if the draft had one
    pub id: Option<String>,
    /// Draft keywords, trimmed and de-duplicated
    pub keywords: Vec<String>,
    /// Report when validation succeeded
    pub report: Option<ValidationReport>,
    /// Error message when validation failed
    pub error: Option<String>,
}

impl BatchItem {
    /// Whether the draft was validated
    pub fn succeeded(&self) -> bool {
        self.report.is_some()
    }

    /// Composite score, if validated
    pub fn seo_total(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.seo_score.total)
    }
}

/// Batch validator for processing many drafts concurrently
pub struct BatchValidator {
    /// The validator shared by all tasks
    validator: Arc<ContentValidator>,

    /// Maximum number of drafts validated at once
    max_concurrent: usize,
}

impl BatchValidator {
    /// Create a new batch validator
    pub fn new(validator: ContentValidator, max_concurrent: usize) -> Self {
        Self {
            validator: Arc::new(validator),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Concurrency limit in use
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Validate all drafts, returning results in input order
    pub async fn validate_all(&self, drafts: Vec<ContentDraft>) -> Vec<BatchItem> {
        self.validate_all_with_progress(drafts, |_, _| {}).await
    }

    /// Validate all drafts, reporting `(completed, total)` after each one
    pub async fn validate_all_with_progress(
        &self,
        drafts: Vec<ContentDraft>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Vec<BatchItem> {
        let entries = drafts.into_iter().map(Ok).collect();
        self.validate_entries_with_progress(entries, progress_callback).await
    }

    /// Validate drafts as loaded from files. Entries that failed to load
    /// become failed items in their input position.
    pub async fn validate_entries(&self, entries: Vec<DraftEntry>) -> Vec<BatchItem> {
        self.validate_entries_with_progress(entries, |_, _| {}).await
    }

    /// Validate loaded drafts, reporting `(completed, total)` after each one
    pub async fn validate_entries_with_progress(
        &self,
        entries: Vec<DraftEntry>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Vec<BatchItem> {
        let total = entries.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let completed = Arc::new(AtomicUsize::new(0));

        let items: Vec<BatchItem> = stream::iter(entries.into_iter().enumerate())
            .map(|(index, entry)| {
                let validator = Arc::clone(&self.validator);
                let semaphore = Arc::clone(&semaphore);
                let completed = Arc::clone(&completed);
                let progress_callback = progress_callback.clone();

                async move {
                    let (id, keywords) = match &entry {
                        Ok(draft) => (draft.id.clone(), draft.unique_keywords()),
                        Err(_) => (None, Vec::new()),
                    };

                    let outcome = match entry {
                        Err(e) => Err(e.to_string()),
                        // Closed only if dropped, which cannot happen while tasks hold an Arc
                        Ok(draft) => match semaphore.acquire().await {
                            Ok(_permit) => {
                                tokio::task::spawn_blocking(move || validator.validate(&draft))
                                    .await
                                    .map_err(|e| format!("Validation task failed: {}", e))
                                    .and_then(|r| r.map_err(|e| e.to_string()))
                            }
                            Err(e) => Err(format!("Validation queue closed: {}", e)),
                        },
                    };

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(done, total);

                    let (report, error) = match outcome {
                        Ok(report) => (Some(report), None),
                        Err(message) => {
                            warn!("Draft {} failed validation: {}", index, message);
                            (None, Some(message))
                        }
                    };

                    BatchItem {
                        index,
                        id,
                        keywords,
                        report,
                        error,
                    }
                }
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        debug!(
            "Batch validation complete: {}/{} drafts validated",
            items.iter().filter(|i| i.succeeded()).count(),
            total
        );

        items
    }
}

/// Aggregate statistics over a validated batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Mean composite score of validated drafts, two decimals
    pub average_seo_score: f64,
    /// Count of validated drafts per score bucket
    pub score_distribution: BTreeMap<String, usize>,
    /// Most frequent lowercased keywords with the number of drafts naming
    /// them, most frequent first
    pub keyword_frequencies: Vec<(String, usize)>,
    /// Indices of validated drafts, best composite score first
    pub ranking: Vec<usize>,
}

/// Bucket label for a composite score
pub fn score_bucket(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => SCORE_BUCKETS[0],
        s if s >= 80.0 => SCORE_BUCKETS[1],
        s if s >= 70.0 => SCORE_BUCKETS[2],
        s if s >= 60.0 => SCORE_BUCKETS[3],
        _ => SCORE_BUCKETS[4],
    }
}

impl BatchSummary {
    /// Summarize batch results
    pub fn from_items(items: &[BatchItem]) -> Self {
        let mut score_distribution: BTreeMap<String, usize> =
            SCORE_BUCKETS.iter().map(|b| (b.to_string(), 0)).collect();
        let mut scored: Vec<(usize, f64)> = Vec::new();
        let mut keyword_counts: HashMap<String, usize> = HashMap::new();

        for item in items {
            // Each draft counts a keyword once, whatever its spelling
            let mut seen = HashSet::new();
            for keyword in item.keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
                let folded = keyword.to_lowercase();
                if seen.insert(folded.clone()) {
                    *keyword_counts.entry(folded).or_insert(0) += 1;
                }
            }

            if let Some(total) = item.seo_total() {
                scored.push((item.index, total));
                if let Some(count) = score_distribution.get_mut(score_bucket(total)) {
                    *count += 1;
                }
            }
        }

        let average_seo_score = if scored.is_empty() {
            0.0
        } else {
            round2(scored.iter().map(|(_, s)| s).sum::<f64>() / scored.len() as f64)
        };

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut keyword_frequencies: Vec<(String, usize)> = keyword_counts.into_iter().collect();
        keyword_frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        keyword_frequencies.truncate(TOP_KEYWORDS);

        Self {
            total: items.len(),
            succeeded: scored.len(),
            failed: items.len() - scored.len(),
            average_seo_score,
            score_distribution,
            keyword_frequencies,
            ranking: scored.into_iter().map(|(index, _)| index).collect(),
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Batch: {}/{} validated, {} failed, average SEO score {:.2}",
            self.succeeded, self.total, self.failed, self.average_seo_score
        )
    }
}
