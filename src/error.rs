use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why a candidate is not a valid cédula. Checks run in declaration order and
/// the first failure is reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("The cédula must have exactly 14 characters once hyphens and whitespace are removed")]
    MalformedLength,

    #[error("The prefix must be 3 digits")]
    InvalidPrefix,

    #[error("The date must be a DDMMYY birth date")]
    InvalidDate,

    #[error("The suffix must be 4 digits followed by a letter")]
    InvalidSuffix,

    #[error("The check letter does not match the numeric part")]
    ChecksumMismatch,
}

impl InvalidReason {
    /// Stable snake_case name, used as a metric label value.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
