use thiserror::Error;

/// Errors raised while ranking profiles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Profile catalog is empty")]
    EmptyCatalog,
}

/// Errors raised while building a profile catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Profile catalog must contain at least one profile")]
    Empty,

    #[error("Duplicate profile id in catalog: {0}")]
    DuplicateId(u32),
}
