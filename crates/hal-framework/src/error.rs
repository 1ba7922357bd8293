//! # Framework Errors
//!
//! This module defines the error types used throughout the HAL framework.
//!
//! Rendering itself never fails: every raw value, including null, has a defined
//! handling path. The only fatal failures are configuration errors, raised once
//! when a [`ResourceType`](crate::ResourceType) is registered, and pagination
//! errors, raised when a caller asks for a page that does not exist.

/// Errors detected while registering a resource type or loading settings.
///
/// These abort setup. A descriptor set that produces one of these errors can
/// never reach a render call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{resource}: field name must not be empty")]
    EmptyFieldName { resource: String },
    #[error("{resource}: field `{field}` is declared more than once")]
    DuplicateField { resource: String, field: String },
    #[error("{resource}: field `{field}` is declared both as a link and as an embedded resource")]
    ConflictingKinds { resource: String, field: String },
    #[error("{resource}: field name `{field}` collides with a reserved HAL key")]
    ReservedFieldName { resource: String, field: String },
    #[error("{resource}: contribution `{field}` targets undeclared field `{target}`")]
    UnknownContributionTarget {
        resource: String,
        field: String,
        target: String,
    },
    #[error("{resource}: contribution `{field}` targets `{target}`, which is not a link field")]
    ContributionTargetNotLink {
        resource: String,
        field: String,
        target: String,
    },
    #[error("{resource}: property `{property}` of link `{target}` is contributed more than once")]
    DuplicateContribution {
        resource: String,
        target: String,
        property: String,
    },
    #[error("{resource}: contribution `{field}` may not overwrite the `href` of `{target}`")]
    ReservedLinkProperty {
        resource: String,
        field: String,
        target: String,
    },
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// Errors raised by the paginators when the requested window does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Invalid page {page}: collection has {num_pages} page(s)")]
    InvalidPage { page: u64, num_pages: u64 },
    #[error("Invalid limit: {0}")]
    InvalidLimit(u64),
}
