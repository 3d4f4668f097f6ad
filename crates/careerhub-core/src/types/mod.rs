//! Core type definitions used across the CareerHub workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use filter::Choice;
pub use id::*;
pub use pagination::{PageNav, PageRequest};
pub use sorting::JobSort;
