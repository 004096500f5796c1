use anyhow::{Result, anyhow};
use isolang::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// Language utilities for content drafts
///
/// A draft carries a language tag that selects how its text is cut into
/// words. Tags can be given directly (`space-delimited`,
/// `generic-segmented`) or as an ISO 639-1 / ISO 639-2 code.
/// Word segmentation family of a draft's language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLanguage {
    /// Scripts without whitespace word boundaries (Chinese, Japanese, Thai...)
    GenericSegmented,
    /// Scripts where whitespace separates words
    #[default]
    SpaceDelimited,
}

/// ISO 639-3 codes of languages written without spaces between words
const UNSEGMENTED_LANGUAGES: &[&str] = &["zho", "jpn", "tha", "lao", "khm", "mya", "bod", "yue"];

impl ContentLanguage {
    /// Tag as written in drafts and config files
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::GenericSegmented => "generic-segmented",
            Self::SpaceDelimited => "space-delimited",
        }
    }

    /// Resolve an ISO language code to its segmentation family
    pub fn from_language_code(code: &str) -> Result<Self> {
        let part2t = normalize_to_part2t(code)?;
        if UNSEGMENTED_LANGUAGES.contains(&part2t.as_str()) {
            Ok(Self::GenericSegmented)
        } else {
            Ok(Self::SpaceDelimited)
        }
    }
}

impl std::fmt::Display for ContentLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl std::str::FromStr for ContentLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "generic-segmented" | "generic_segmented" => Ok(Self::GenericSegmented),
            "space-delimited" | "space_delimited" => Ok(Self::SpaceDelimited),
            other => Self::from_language_code(other)
                .map_err(|_| anyhow!("Invalid content language: {}", s)),
        }
    }
}

// Accepts the kebab-case tags as well as ISO codes such as "zh" or "eng"
impl<'de> Deserialize<'de> for ContentLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Map an ISO 639-2/B code to its ISO 639-2/T form
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        "tib" => Some("bod"),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        if let Some(part2t) = bibliographic_to_terminology(&normalized_code) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
