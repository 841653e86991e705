//! Shared primitive aliases and the availability status enum.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// ISBN text as entered by the user; never validated.
pub type Isbn = String;

/// Position of a record in catalog order.
pub type Slot = usize;

/// Availability of a catalog entry.
///
/// The defined operations only ever write [`BookStatus::Available`] or
/// [`BookStatus::Issued`]. [`BookStatus::Other`] holds whatever status text a
/// hand-edited file contained, so it can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
    /// On the shelf.
    #[default]
    Available,
    /// Lent out.
    Issued,
    /// Unrecognised status text read from disk.
    Other(String),
}

impl BookStatus {
    /// Wire and display form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Issued => "issued",
            Self::Other(raw) => raw,
        }
    }

    /// True for [`BookStatus::Issued`].
    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued)
    }

    /// True for [`BookStatus::Available`].
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BookStatus {
    fn from(value: &str) -> Self {
        match value {
            "available" => Self::Available,
            "issued" => Self::Issued,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BookStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Self::Available,
            "issued" => Self::Issued,
            _ => Self::Other(value),
        }
    }
}

impl From<BookStatus> for String {
    fn from(value: BookStatus) -> Self {
        match value {
            BookStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for BookStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
