//! Error types for Cadastro
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::StudentId;

/// Result type alias using CadastroError
pub type Result<T> = std::result::Result<T, CadastroError>;

/// Unified error type for Cadastro operations
#[derive(Debug, Error)]
pub enum CadastroError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    /// Backing file exists but cannot be parsed. Fatal at startup.
    #[error("Corrupt storage at line {line}: {reason}")]
    CorruptStorage { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("Student {0} not found")]
    NotFound(StudentId),

    #[error("Duplicate student id: {0}")]
    DuplicateId(StudentId),

    /// The largest id is already taken, no successor exists
    #[error("No id left after {0}")]
    IdExhausted(StudentId),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// Field left empty or holding the column delimiter
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-numeric answer where a number was expected
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Gave up on prompt '{prompt}' after {attempts} invalid answers")]
    RetriesExhausted { prompt: String, attempts: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CadastroError {
    /// Build a corrupt-storage error for a 1-based line number
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        CadastroError::CorruptStorage {
            line,
            reason: reason.into(),
        }
    }

    /// Errors that can be answered by asking the same question again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CadastroError::Validation(_) | CadastroError::Parse(_))
    }

    /// Text shown at the prompt: the bare message for input errors
    pub fn user_message(&self) -> String {
        match self {
            CadastroError::Validation(msg) | CadastroError::Parse(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
