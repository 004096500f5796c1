/*!
 * # seoscore - Content validation and scoring for SEO drafts
 *
 * A Rust library that scores generated marketing content before publication.
 *
 * ## Features
 *
 * - Keyword density per target keyword
 * - Readability metrics and repeated-term detection
 * - Structural checks (headings, images, lists, paragraphs)
 * - Title and meta description compliance
 * - Weighted composite SEO score with suggestions
 * - Word segmentation for space-delimited and unsegmented scripts
 * - Concurrent batch validation with summary statistics
 * - CSV and JSON export, keyword list import
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `draft`: Content draft input type
 * - `segmentation`: Word, sentence and paragraph segmentation:
 *   - `segmentation::whitespace`: Space-delimited languages
 *   - `segmentation::dictionary`: Dictionary-based segmentation
 *   - `segmentation::registry`: Strategy lookup per language tag
 * - `validation`: Analyzers and the validation service
 * - `batch`: Concurrent batch validation
 * - `export`: CSV/JSON export and keyword import
 * - `file_utils`: File system operations
 * - `language_utils`: Language tags and ISO code utilities
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod batch;
pub mod draft;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod language_utils;
pub mod segmentation;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use batch::{BatchItem, BatchSummary, BatchValidator};
pub use draft::{ContentDraft, DraftEntry};
pub use errors::{AppError, ConfigError, ExportError, ValidationError};
pub use export::{ExportFormat, ExportRow, ImportFormat, export_rows, import_keywords};
pub use language_utils::{ContentLanguage, get_language_name, normalize_to_part2t};
pub use segmentation::{Segmentation, Segmenter, SegmenterRegistry};
pub use validation::{ContentValidator, ValidationConfig, ValidationReport};
