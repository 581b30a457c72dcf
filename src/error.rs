//! Error types for the bank entity model
//!
//! Field accessors never fail; these cover the few behavioral operations that can.

use thiserror::Error;

/// Result type alias for entity operations
pub type BankResult<T> = Result<T, BankError>;

/// Main error type for entity operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// A person was asked to speak a language it does not support
    #[error("unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    /// The account's session was released
    #[error("account {identifier} is closed")]
    AccountClosed { identifier: String },

    /// Positional branch lookup out of range
    #[error("no branch at index {index}")]
    BranchNotFound { index: usize },

    /// Branch holds no vault with this id
    #[error("vault not found: {id}")]
    VaultNotFound { id: String },
}
