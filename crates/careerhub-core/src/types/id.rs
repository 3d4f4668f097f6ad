//! Newtype wrappers around the opaque string identifiers issued by the API.
//!
//! Using distinct types prevents accidentally passing a `JobId` where a
//! `CompanyId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is blank.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(crate::error::AppError::validation(concat!(
                        stringify!($name),
                        " must not be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a recruiter account.
    UserId
);

define_id!(
    /// Unique identifier for a company profile.
    CompanyId
);

define_id!(
    /// Unique identifier for a job listing.
    JobId
);

define_id!(
    /// Unique identifier for a careers page content section.
    SectionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_trims() {
        let id: CompanyId = "  64f0c2a1  ".parse().expect("should parse");
        assert_eq!(id.as_str(), "64f0c2a1");
    }

    #[test]
    fn test_from_str_rejects_blank() {
        assert!("   ".parse::<JobId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = JobId::new("job-1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"job-1\"");
    }
}
