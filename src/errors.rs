//! Unified error types for the costing engine and its repository layer.

use thiserror::Error;

/// Errors raised by validation, the pricing pipeline and storage access.
#[derive(Debug, Error)]
pub enum Error {
    /// Pricing needs data the business profile does not provide yet.
    #[error("Configuration incomplete: {message}")]
    ConfigurationIncomplete {
        /// Actionable description shown to the user
        message: String,
    },

    /// A recipe refers to an ingredient or packaging that does not exist.
    #[error("Unresolved {kind} reference: {id}")]
    UnresolvedReference {
        /// Kind of the referenced record ("ingredient", "packaging")
        kind: &'static str,
        /// Identifier that could not be found
        id: i64,
    },

    /// Negative, non-finite or non-numeric value for a numeric field.
    #[error("Invalid value for {field}: {value}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value as entered
        value: String,
    },

    /// The requested record does not exist for this owner.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record
        entity: &'static str,
        /// Identifier that was looked up
        id: i64,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Underlying `SeaORM` failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Shorthand for an `InvalidInput` built from any displayable value.
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
