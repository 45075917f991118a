//! Error types for the portfolio core

use thiserror::Error;

/// Top-level error type for the portfolio core
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to project lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Project not found: {id}")]
    NotFound { id: String },

    #[error("Duplicate project id: {id}")]
    DuplicateId { id: String },
}

/// Errors related to preference persistence
///
/// None of these are fatal: theme state falls back to session-only
/// behavior when any of them occur.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preference data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors related to the contact form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid color scheme {0:?}, expected \"light\" or \"dark\"")]
    InvalidColorScheme(String),
}

/// Result type alias using PortfolioError
pub type Result<T> = std::result::Result<T, PortfolioError>;
