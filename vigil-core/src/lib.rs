//! # vigil-core
//!
//! Foundation crate for the Vigil health contributor toolkit.
//! Defines the capability traits and errors shared across the workspace.
//! Every other crate in the workspace depends on this.

pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{CompositionError, VigilError, VigilResult};
pub use traits::{CompositeFactory, IndicatorFactory};
