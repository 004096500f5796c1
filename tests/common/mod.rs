/*!
 * Common test utilities for the seoscore test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use seoscore::ContentDraft;

/// Title used by the well-formed sample draft
pub const SAMPLE_TITLE: &str = "Buy Cheap Wireless Headphones Now";

/// Meta description used by the well-formed sample draft (141 chars)
pub const SAMPLE_DESCRIPTION: &str = "Compare the best wireless headphones of the year with honest notes on sound quality, battery life, comfort and price to help you choose well.";

/// Paragraphs of the sample body: one h1, two h2, one image, one list item
const SAMPLE_PARAGRAPHS: [&str; 6] = [
    "# Wireless Headphones Buying Guide\nChoosing wireless headphones is easier when you know what matters. This guide walks through sound, battery, comfort and price so you can buy with confidence.",
    "## Sound Quality\nGood drivers give clear highs and a warm low end. Look for models that support modern codecs, since they keep detail intact over a Bluetooth link.",
    "![Wireless headphones on a desk](https://example.com/headphones.jpg)\nClosed back designs block more outside noise. Open designs feel airy but leak sound, which matters on a train or in a shared office.",
    "## Battery Life\nMost wireless headphones now last a full day on one charge. Fast charging is a welcome bonus when you forget to plug them in overnight.",
    "- Up to thirty hours of playback on a single charge\nComfort decides whether you keep wearing them. Soft ear cushions and a light headband make long listening sessions pleasant.",
    "Set a budget first and then compare the features that matter to you. A mid range pair often matches the sound of flagship models for far less money.",
];

/// Routes library logs to the test output; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Body of the well-formed sample draft (over 1000 chars, six paragraphs)
pub fn sample_body() -> String {
    SAMPLE_PARAGRAPHS.join("\n\n")
}

/// A well-formed draft targeting "wireless headphones"
pub fn sample_draft() -> ContentDraft {
    ContentDraft::new(
        SAMPLE_TITLE,
        SAMPLE_DESCRIPTION,
        vec!["wireless headphones".to_string()],
        sample_body(),
    )
}

/// A short draft with the given title and keywords
pub fn short_draft(title: &str, keywords: &[&str]) -> ContentDraft {
    ContentDraft::new(
        title,
        "A short description",
        keywords.iter().map(|k| k.to_string()).collect(),
        "Short body text.",
    )
}

/// JSON document holding the given drafts as an array
pub fn drafts_json(drafts: &[ContentDraft]) -> Result<String> {
    Ok(serde_json::to_string_pretty(drafts)?)
}
