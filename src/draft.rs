/*!
 * Content drafts submitted for validation.
 *
 * A draft is one candidate piece of generated marketing text: title,
 * meta description, target keywords, markup-flavored body and the
 * language tag that selects word segmentation.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::language_utils::ContentLanguage;

/// One piece of generated content to score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    /// Optional caller-side identifier, carried into batch results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Page title
    pub title: String,

    /// Meta description
    #[serde(alias = "meta_description")]
    pub meta_description: String,

    /// Target keywords, in priority order
    pub keywords: Vec<String>,

    /// Body text with simplified Markdown markup
    pub body: String,

    /// Segmentation family of the text
    #[serde(default)]
    pub language: ContentLanguage,
}

/// A draft read from a file, or the reason it could not be read
pub type DraftEntry = Result<ContentDraft, ValidationError>;

/// Draft as read from untrusted JSON, before required fields are checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDraft {
    id: Option<String>,
    title: Option<String>,
    #[serde(alias = "meta_description")]
    meta_description: Option<String>,
    keywords: Option<Vec<String>>,
    body: Option<String>,
    language: Option<ContentLanguage>,
}

impl ContentDraft {
    /// Create a space-delimited draft
    pub fn new(
        title: impl Into<String>,
        meta_description: impl Into<String>,
        keywords: Vec<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            meta_description: meta_description.into(),
            keywords,
            body: body.into(),
            language: ContentLanguage::default(),
        }
    }

    /// Set the language tag
    pub fn with_language(mut self, language: ContentLanguage) -> Self {
        self.language = language;
        self
    }

    /// Set the caller-side identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parse a draft from JSON, reporting absent fields as invalid input
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_input("draft", &format!("is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Build a draft from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let draft = Self::from_value_unchecked(value)?;
        draft.check()?;
        Ok(draft)
    }

    /// Build a draft from a JSON value, checking only that every field is present.
    ///
    /// Keyword rules are left to the validator.
    pub fn from_value_unchecked(value: serde_json::Value) -> Result<Self, ValidationError> {
        let raw: RawDraft = serde_json::from_value(value)
            .map_err(|e| ValidationError::invalid_input("draft", &format!("has malformed fields: {}", e)))?;

        Ok(Self {
            id: raw.id,
            title: raw.title.ok_or_else(|| ValidationError::invalid_input("title", "is missing"))?,
            meta_description: raw
                .meta_description
                .ok_or_else(|| ValidationError::invalid_input("metaDescription", "is missing"))?,
            keywords: raw
                .keywords
                .ok_or_else(|| ValidationError::invalid_input("keywords", "is missing"))?,
            body: raw.body.ok_or_else(|| ValidationError::invalid_input("body", "is missing"))?,
            language: raw.language.unwrap_or_default(),
        })
    }

    /// Check that the draft carries at least one usable keyword
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.keywords.is_empty() {
            return Err(ValidationError::invalid_input("keywords", "must not be empty"));
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ValidationError::invalid_input(
                "keywords",
                "must contain at least one non-blank entry",
            ));
        }
        Ok(())
    }

    /// Trimmed, de-duplicated keywords in first-seen order.
    ///
    /// Duplicates are detected case-insensitively; blank entries are dropped.
    pub fn unique_keywords(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .filter(|k| seen.insert(k.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}
