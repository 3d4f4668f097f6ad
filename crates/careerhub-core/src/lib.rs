//! # careerhub-core
//!
//! Core crate for CareerHub. Contains configuration schemas, typed
//! identifiers, pagination/sorting/filter types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other CareerHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
