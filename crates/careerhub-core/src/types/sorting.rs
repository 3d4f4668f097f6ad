//! Sort modes for job listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort order accepted by the job search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    /// Most recently posted first.
    #[default]
    Newest,
    /// Oldest posting first.
    Oldest,
    /// Highest salary first.
    Highest,
    /// Lowest salary first.
    Lowest,
}

impl JobSort {
    /// All sort modes in display order.
    pub const ALL: [JobSort; 4] = [Self::Highest, Self::Lowest, Self::Newest, Self::Oldest];

    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Highest => "highest",
            Self::Lowest => "lowest",
        }
    }
}

impl fmt::Display for JobSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "highest" => Ok(Self::Highest),
            "lowest" => Ok(Self::Lowest),
            _ => Err(AppError::validation(format!(
                "Invalid sort '{s}'. Expected one of: newest, oldest, highest, lowest"
            ))),
        }
    }
}
