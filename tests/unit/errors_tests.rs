/*!
 * Tests for error types and conversions
 */

use seoscore::errors::{AppError, ConfigError, ExportError, ValidationError};

#[test]
fn test_validationError_invalidInput_shouldDisplayFieldAndReason() {
    let error = ValidationError::invalid_input("keywords", "must not be empty");

    assert_eq!(error.to_string(), "Invalid input: field 'keywords' must not be empty");
}

#[test]
fn test_configError_invalidRange_shouldDisplayBounds() {
    let error = ConfigError::InvalidRange {
        name: "density",
        min: 4.0,
        max: 3.0,
    };

    let display = error.to_string();
    assert!(display.contains("density"));
    assert!(display.contains("min 4"));
    assert!(display.contains("max 3"));
}

#[test]
fn test_appError_fromValidationError_shouldWrap() {
    let error: AppError = ValidationError::invalid_input("body", "is missing").into();

    assert!(matches!(error, AppError::Validation(_)));
    assert!(error.to_string().starts_with("Validation error:"));
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

    let error: AppError = io.into();

    assert!(matches!(error, AppError::File(ref message) if message == "gone"));
}

#[test]
fn test_exportError_fromSerdeError_shouldWrap() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error: ExportError = serde_error.into();

    assert!(matches!(error, ExportError::Serialization(_)));
    assert_eq!(ExportError::NoContent.to_string(), "No content found to export");
}
