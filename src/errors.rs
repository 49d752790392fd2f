// ABOUTME: Error types for the mdslides application
// ABOUTME: Provides structured errors for every way slide markup can fail to convert

use thiserror::Error;

/// Errors raised while converting slide markup to HTML.
///
/// Every markup variant carries the offending line so the caller can report
/// exactly which input text aborted the conversion. None of them are
/// recoverable: detection aborts the whole run and discards unflushed output.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Too many emphasis markers (more than three asterisks) in line: {line}")]
    TooManyEmphasisMarkers { line: String },

    #[error("Emphasis closing run does not match its opening run in line: {line}")]
    MismatchedEmphasisClose { line: String },

    #[error("Emphasis opened but never closed in line: {line}")]
    UnclosedEmphasis { line: String },

    #[error("Link text has no closing ']' in line: {line}")]
    UnterminatedLinkText { line: String },

    #[error("Link url missing or has no closing ')' in line: {line}")]
    MissingOrUnterminatedLinkUrl { line: String },

    #[error("Inline code has no closing backtick in line: {line}")]
    UnterminatedInlineCode { line: String },

    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
