//! Registration and credential checks performed before contacting the API.

pub mod validator;

pub use self::validator::RegistrationValidator;
