use anyhow::{Context, Result, anyhow};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::draft::{ContentDraft, DraftEntry};
use crate::export::ImportFormat;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @parses: A JSON document holding one draft object or an array of drafts
    // @returns: One entry per draft; a malformed draft fails alone
    // @note: Keyword checks are left to the validator
    pub fn parse_drafts(json: &str) -> Result<Vec<DraftEntry>> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Drafts file is not valid JSON")?;

        let values = match value {
            serde_json::Value::Array(items) => items,
            object @ serde_json::Value::Object(_) => vec![object],
            _ => return Err(anyhow!("Drafts file must hold an object or an array of objects")),
        };

        Ok(values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                ContentDraft::from_value_unchecked(value).inspect_err(|e| {
                    warn!("Draft {} is malformed: {}", index, e);
                })
            })
            .collect())
    }

    // @reads: Drafts from a JSON file
    pub fn read_drafts<P: AsRef<Path>>(path: P) -> Result<Vec<DraftEntry>> {
        let content = Self::read_to_string(&path)?;
        Self::parse_drafts(&content)
            .with_context(|| format!("Failed to load drafts from {:?}", path.as_ref()))
    }

    // @reads: Drafts from a file, or from every .json file under a directory
    pub fn collect_drafts<P: AsRef<Path>>(input: P) -> Result<Vec<DraftEntry>> {
        let input = input.as_ref();

        if Self::file_exists(input) {
            return Self::read_drafts(input);
        }
        if !Self::dir_exists(input) {
            return Err(anyhow!("Input path does not exist: {:?}", input));
        }

        let mut drafts = Vec::new();
        for path in Self::find_files(input, "json")? {
            drafts.extend(Self::read_drafts(&path)?);
        }
        Ok(drafts)
    }

    // @detects: Keyword list format from the file extension
    pub fn detect_import_format<P: AsRef<Path>>(path: P) -> Result<ImportFormat> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .ok_or_else(|| anyhow!("Keyword file has no extension: {:?}", path))?;

        ext.parse::<ImportFormat>()
            .with_context(|| format!("Unsupported keyword file: {:?}", path))
    }
}
