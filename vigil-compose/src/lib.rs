//! # vigil-compose
//!
//! Contributor assembly for the Vigil health toolkit: wraps a sole named
//! source as an indicator, or hands several off to a caller-supplied
//! composite factory.

pub mod builder;
pub mod convert;
pub mod tracing_setup;

pub use builder::ContributorBuilder;
pub use convert::ConvertFactory;
