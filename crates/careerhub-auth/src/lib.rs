//! # careerhub-auth
//!
//! Client-side authentication for CareerHub.
//!
//! ## Modules
//!
//! - `session`: the single authoritative session (token, user, company) with file persistence
//! - `jwt`: read-only inspection of the bearer token payload (expiry)
//! - `password`: registration and credential checks run before any request
//! - `guard`: route gate deciding which pages need a session

pub mod guard;
pub mod jwt;
pub mod password;
pub mod session;

pub use guard::{RouteDecision, RouteGate};
pub use jwt::TokenClaims;
pub use password::RegistrationValidator;
pub use session::{Session, SessionManager, SessionStore};
