//! # careerhub-entity
//!
//! Domain entity models for CareerHub. Every struct in this crate mirrors a
//! resource exchanged with the careers-page REST API or a domain value
//! object. All entities derive `Debug`, `Clone`, `Serialize` and
//! `Deserialize`; request payloads additionally derive `validator::Validate`.

pub mod company;
pub mod job;
pub mod user;
