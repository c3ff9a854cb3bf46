//! Error taxonomy for taxonomy store operations.

use taxa_store::StoreError;
use taxa_types::TypeError;
use thiserror::Error;

/// Errors produced by taxonomy operations.
///
/// Each variant carries the context needed for its caller-facing message;
/// [`TaxonomyError::kind`] collapses variants into the coarse classification
/// the transport edge maps to status codes.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// A required input field was missing or empty.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// A subcategory add was attempted with no existing main category.
    #[error("parent category '{category}' does not exist")]
    ParentMissing { category: String },

    /// A main category with this name already has a record.
    #[error("category '{category}' already exists")]
    CategoryExists { category: String },

    /// A subcategory with this key already has a record.
    #[error("subcategory '{subcategory}' already exists under category '{category}'")]
    SubcategoryExists {
        category: String,
        subcategory: String,
    },

    /// A category query matched no records.
    #[error("category '{category}' not found")]
    CategoryNotFound { category: String },

    /// A main-category delete targeted a category with no main record.
    #[error("main category '{category}' not found")]
    MainCategoryNotFound { category: String },

    /// A subcategory delete targeted a key with no record.
    #[error("subcategory '{subcategory}' not found in category '{category}'")]
    SubcategoryNotFound {
        category: String,
        subcategory: String,
    },

    /// A main-category delete was attempted while subcategories remain.
    #[error(
        "cannot delete main category '{category}' because it has {children} \
         subcategories; delete all subcategories first"
    )]
    HasChildren { category: String, children: usize },

    /// The underlying table failed; the provider message is carried verbatim.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Catch-all for faults not classified above.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl TaxonomyError {
    /// The coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaxonomyError::Validation { .. } => ErrorKind::Validation,
            TaxonomyError::ParentMissing { .. } => ErrorKind::ParentMissing,
            TaxonomyError::CategoryExists { .. } | TaxonomyError::SubcategoryExists { .. } => {
                ErrorKind::AlreadyExists
            }
            TaxonomyError::CategoryNotFound { .. }
            | TaxonomyError::MainCategoryNotFound { .. }
            | TaxonomyError::SubcategoryNotFound { .. } => ErrorKind::NotFound,
            TaxonomyError::HasChildren { .. } => ErrorKind::HasChildren,
            TaxonomyError::Storage(_) => ErrorKind::Storage,
            TaxonomyError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<TypeError> for TaxonomyError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::EmptyField { field } => TaxonomyError::Validation { field },
        }
    }
}

/// Coarse error classification, one per kind in the store's contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ParentMissing,
    AlreadyExists,
    NotFound,
    HasChildren,
    Storage,
    Unexpected,
}

/// Result alias for taxonomy operations.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_collapse_variants() {
        let exists = TaxonomyError::CategoryExists {
            category: "books".into(),
        };
        let sub_exists = TaxonomyError::SubcategoryExists {
            category: "books".into(),
            subcategory: "fiction".into(),
        };
        assert_eq!(exists.kind(), ErrorKind::AlreadyExists);
        assert_eq!(sub_exists.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn storage_message_is_preserved() {
        let err = TaxonomyError::from(StoreError::Unavailable("throughput exceeded".into()));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().contains("throughput exceeded"));
    }

    #[test]
    fn validation_from_type_error() {
        let err: TaxonomyError = TypeError::EmptyField { field: "category" }.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "category is required");
    }
}
