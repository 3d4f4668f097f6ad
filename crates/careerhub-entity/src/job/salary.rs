//! Salary disclosure modes and the amounts each mode carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use careerhub_core::AppError;

/// How a job posting discloses its salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SalaryType {
    /// Salary withheld.
    #[default]
    Confidential,
    /// A minimum and maximum amount.
    Range,
    /// A single amount.
    Fixed,
}

impl SalaryType {
    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confidential => "CONFIDENTIAL",
            Self::Range => "RANGE",
            Self::Fixed => "FIXED",
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confidential" => Ok(Self::Confidential),
            "range" => Ok(Self::Range),
            "fixed" => Ok(Self::Fixed),
            _ => Err(AppError::validation(format!(
                "Invalid salary type: '{s}'. Expected one of: confidential, range, fixed"
            ))),
        }
    }
}

/// Pay period for a salary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SalaryFrequency {
    /// Paid per month.
    Monthly,
    /// Paid per year.
    Yearly,
}

impl FromStr for SalaryFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(AppError::validation(format!(
                "Invalid salary frequency: '{s}'. Expected one of: monthly, yearly"
            ))),
        }
    }
}

/// The amounts implied by a [`SalaryType`], resolved from a job's raw fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryDisclosure {
    /// No amount is shown.
    Confidential,
    /// Minimum and maximum amount.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// A single amount.
    Fixed {
        /// The amount.
        amount: f64,
    },
}

impl SalaryDisclosure {
    /// Resolve the disclosure from a mode and its optional amount fields.
    ///
    /// Range requires both bounds, Fixed requires the fixed amount.
    /// Confidential ignores any amounts that happen to be present.
    pub fn resolve(
        salary_type: SalaryType,
        min: Option<f64>,
        max: Option<f64>,
        fixed: Option<f64>,
    ) -> Result<Self, AppError> {
        match salary_type {
            SalaryType::Confidential => Ok(Self::Confidential),
            SalaryType::Range => match (min, max) {
                (Some(min), Some(max)) => Ok(Self::Range { min, max }),
                _ => Err(AppError::validation(
                    "Range salary requires both a minimum and a maximum",
                )),
            },
            SalaryType::Fixed => fixed
                .map(|amount| Self::Fixed { amount })
                .ok_or_else(|| AppError::validation("Fixed salary requires an amount")),
        }
    }

    /// Lower and upper bounds for structured data (`minValue`/`maxValue`).
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Confidential => None,
            Self::Range { min, max } => Some((*min, *max)),
            Self::Fixed { amount } => Some((*amount, *amount)),
        }
    }
}
