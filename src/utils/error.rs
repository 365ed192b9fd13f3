// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("The provided file name does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Indicator label not found in document: {0:?}")]
    IndicatorNotFound(String),

    #[error("Paragraph boundary missing for {indicator}: {pieces} piece(s), need at least {needed}")]
    ParagraphNotFound {
        indicator: String,
        pieces: usize,
        needed: usize,
    },

    #[error("Expected growth and decline sentences, found {0} fragment(s)")]
    TooFewSentences(usize),

    #[error("Industry listed more than once: {0}")]
    DuplicateIndustry(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Document could not be read: {0}")]
    Document(#[from] DocumentError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
