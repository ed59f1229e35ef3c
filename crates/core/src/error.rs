//! Error model shared by every crate in the workspace.

use thiserror::Error;

use crate::entity::EntityKind;

/// Result type used at the domain boundary (input validation).
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by every storage and integrity operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Input validation failure.
///
/// Raised while building typed values from raw input, before anything reaches the
/// store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Outcome of a rejected store operation.
///
/// These are the only two failure kinds the store and the integrity layer produce.
/// Both are deterministic given the same state and input; neither is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record of `kind` with this id exists. Also reported when a referenced
    /// dependency (vendor or product) is missing at creation time.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A record of `kind` with this id is already stored.
    #[error("{kind} '{id}' already exists")]
    AlreadyExists { kind: EntityKind, id: String },
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn already_exists(kind: EntityKind, id: impl ToString) -> Self {
        Self::AlreadyExists {
            kind,
            id: id.to_string(),
        }
    }

    /// Entity kind the failed lookup or insert targeted.
    pub fn kind(&self) -> EntityKind {
        match self {
            StoreError::NotFound { kind, .. } | StoreError::AlreadyExists { kind, .. } => *kind,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }
}
