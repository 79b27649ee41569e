// Processing states a page moves through in the diff pipeline.
// Fixtures produced by the generator are always PREPROCESSED.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    Pending,
    Preprocessing,
    Preprocessed,
    #[serde(rename = "PREPROCESSING_TIMEDOUT")]
    PreprocessingTimedOut,
    PreprocessingFailed,
    #[serde(rename = "MATCHING_CALCULATION_IN_PROGRESS")]
    MatchingCalculation,
    #[serde(rename = "MATCHING_CALCULATION_TIMEDOUT")]
    MatchingCalculationTimedOut,
    MatchingCalculationFailed,
    MatchingCalculationSuccess,
    #[serde(rename = "DIFFERENTIAL_CALCULATION_IN_PROGRESS")]
    DifferentialCalculation,
    #[serde(rename = "DIFFERENTIAL_CALCULATION_TIMEDOUT")]
    DifferentialCalculationTimedOut,
    DifferentialCalculationNoDifferencesFound,
    DifferentialCalculationFailed,
    DifferentialCalculationNotEnoughMatches,
    Completed,
    Failed,
    Canceled,
    Retry,
}

impl PageStatus {
    pub const ALL: [PageStatus; 18] = [
        PageStatus::Pending,
        PageStatus::Preprocessing,
        PageStatus::Preprocessed,
        PageStatus::PreprocessingTimedOut,
        PageStatus::PreprocessingFailed,
        PageStatus::MatchingCalculation,
        PageStatus::MatchingCalculationTimedOut,
        PageStatus::MatchingCalculationFailed,
        PageStatus::MatchingCalculationSuccess,
        PageStatus::DifferentialCalculation,
        PageStatus::DifferentialCalculationTimedOut,
        PageStatus::DifferentialCalculationNoDifferencesFound,
        PageStatus::DifferentialCalculationFailed,
        PageStatus::DifferentialCalculationNotEnoughMatches,
        PageStatus::Completed,
        PageStatus::Failed,
        PageStatus::Canceled,
        PageStatus::Retry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Pending => "PENDING",
            PageStatus::Preprocessing => "PREPROCESSING",
            PageStatus::Preprocessed => "PREPROCESSED",
            PageStatus::PreprocessingTimedOut => "PREPROCESSING_TIMEDOUT",
            PageStatus::PreprocessingFailed => "PREPROCESSING_FAILED",
            PageStatus::MatchingCalculation => "MATCHING_CALCULATION_IN_PROGRESS",
            PageStatus::MatchingCalculationTimedOut => "MATCHING_CALCULATION_TIMEDOUT",
            PageStatus::MatchingCalculationFailed => "MATCHING_CALCULATION_FAILED",
            PageStatus::MatchingCalculationSuccess => "MATCHING_CALCULATION_SUCCESS",
            PageStatus::DifferentialCalculation => "DIFFERENTIAL_CALCULATION_IN_PROGRESS",
            PageStatus::DifferentialCalculationTimedOut => "DIFFERENTIAL_CALCULATION_TIMEDOUT",
            PageStatus::DifferentialCalculationNoDifferencesFound => {
                "DIFFERENTIAL_CALCULATION_NO_DIFFERENCES_FOUND"
            }
            PageStatus::DifferentialCalculationFailed => "DIFFERENTIAL_CALCULATION_FAILED",
            PageStatus::DifferentialCalculationNotEnoughMatches => {
                "DIFFERENTIAL_CALCULATION_NOT_ENOUGH_MATCHES"
            }
            PageStatus::Completed => "COMPLETED",
            PageStatus::Failed => "FAILED",
            PageStatus::Canceled => "CANCELED",
            PageStatus::Retry => "RETRY",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown page status: {}", s))
    }
}
