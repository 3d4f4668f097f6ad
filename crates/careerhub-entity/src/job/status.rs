//! Job status and work policy enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use careerhub_core::AppError;

/// Lifecycle status of a job listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    /// Accepting applications and shown on the public page.
    #[default]
    #[serde(alias = "open", alias = "active")]
    Open,
    /// No longer accepting applications.
    #[serde(alias = "closed", alias = "archived")]
    Closed,
}

impl JobStatus {
    /// Check whether moving to `next` is permitted.
    ///
    /// Closing is one-directional: there is no reopen path.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!((self, next), (Self::Open, Self::Closed))
    }

    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "active" => Ok(Self::Open),
            "closed" | "archived" => Ok(Self::Closed),
            _ => Err(AppError::validation(format!(
                "Invalid job status: '{s}'. Expected one of: open, closed"
            ))),
        }
    }
}

/// Where the work for a job is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkPolicy {
    /// Fully remote.
    Remote,
    /// Split between office and remote.
    Hybrid,
    /// In the office.
    Onsite,
}

impl WorkPolicy {
    /// All work policies in display order.
    pub const ALL: [WorkPolicy; 3] = [Self::Remote, Self::Hybrid, Self::Onsite];

    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
            Self::Onsite => "Onsite",
        }
    }
}

impl fmt::Display for WorkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "hybrid" => Ok(Self::Hybrid),
            "onsite" | "on-site" => Ok(Self::Onsite),
            _ => Err(AppError::validation(format!(
                "Invalid work policy: '{s}'. Expected one of: Remote, Hybrid, Onsite"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_is_one_directional() {
        assert!(JobStatus::Open.can_transition_to(JobStatus::Closed));
        assert!(!JobStatus::Closed.can_transition_to(JobStatus::Open));
        assert!(!JobStatus::Open.can_transition_to(JobStatus::Open));
    }

    #[test]
    fn test_status_accepts_legacy_spellings() {
        let status: JobStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, JobStatus::Closed);
        assert_eq!("active".parse::<JobStatus>().unwrap(), JobStatus::Open);
    }

    #[test]
    fn test_work_policy_wire_format() {
        let json = serde_json::to_string(&WorkPolicy::Onsite).unwrap();
        assert_eq!(json, "\"Onsite\"");
        assert_eq!("REMOTE".parse::<WorkPolicy>().unwrap(), WorkPolicy::Remote);
    }
}
