//! Bearer token inspection.
//!
//! The API signs its tokens; the client never verifies signatures and only
//! reads the payload to learn when the token expires.

pub mod claims;

pub use claims::TokenClaims;
