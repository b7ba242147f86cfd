//! Workspace-wide error types.

pub mod composition_error;

pub use composition_error::CompositionError;

/// Top-level error for all Vigil operations.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Convenience result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;
