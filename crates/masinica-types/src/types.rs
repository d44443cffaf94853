//! Shared value types

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Compliance event types offered when creating an event
///
/// Events store their label as a plain string, so this list is only
/// consulted at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventLabel {
    /// Mandatory third-party liability insurance
    Rca,
    /// Optional comprehensive insurance
    Casco,
    /// Periodic technical inspection
    Itp,
    /// Road tax vignette
    Rovinieta,
}

impl EventLabel {
    pub const ALL: [EventLabel; 4] = [
        EventLabel::Rca,
        EventLabel::Casco,
        EventLabel::Itp,
        EventLabel::Rovinieta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::Rca => "RCA",
            EventLabel::Casco => "CASCO",
            EventLabel::Itp => "ITP",
            EventLabel::Rovinieta => "ROVINIETA",
        }
    }
}

impl std::fmt::Display for EventLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventLabel {
    type Err = ValidationError;

    /// Parse a label picked from the closed list. Surrounding whitespace is
    /// ignored, case is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingLabel);
        }
        EventLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == trimmed)
            .ok_or_else(|| ValidationError::UnknownLabel(trimmed.to_string()))
    }
}
