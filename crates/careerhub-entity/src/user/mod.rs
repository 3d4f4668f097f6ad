//! User and authentication entities.

pub mod model;

pub use model::{AuthResponse, CompanySummary, Credentials, Registration, User};
