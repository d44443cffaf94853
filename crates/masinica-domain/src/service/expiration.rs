//! Expiration calculator
//!
//! Derives the days left until an event expires and how urgent it is.
//! Only calendar dates take part: callers read "today" once per render and
//! pass the same value to every call.

use crate::model::Event;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest remaining-days value still considered critical
pub const CRITICAL_MAX_DAYS: i64 = 3;

/// Highest remaining-days value still considered a warning
pub const WARNING_MAX_DAYS: i64 = 15;

/// Urgency tier of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Expired or at most 3 days left
    Critical,
    /// 4 to 15 days left
    Warning,
    /// More than 15 days left
    Normal,
}

impl Urgency {
    pub fn from_remaining_days(days: i64) -> Self {
        match days {
            d if d <= CRITICAL_MAX_DAYS => Urgency::Critical,
            d if d <= WARNING_MAX_DAYS => Urgency::Warning,
            _ => Urgency::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "CRITICAL",
            Urgency::Warning => "WARNING",
            Urgency::Normal => "NORMAL",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of one expiration date against "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    /// Whole days from today to the expiration date, negative once expired
    pub remaining_days: i64,
    pub urgency: Urgency,
}

/// Classify `expiration_date` as seen on `today`
pub fn classify(expiration_date: NaiveDate, today: NaiveDate) -> Expiration {
    let remaining_days = expiration_date.signed_duration_since(today).num_days();
    Expiration {
        remaining_days,
        urgency: Urgency::from_remaining_days(remaining_days),
    }
}

impl Expiration {
    pub fn is_expired(&self) -> bool {
        self.remaining_days < 0
    }

    /// Sentence shown on the event detail screen
    pub fn describe(&self) -> String {
        let days = self.remaining_days;
        if days < 0 {
            format!("Expired {} {} ago.", -days, day_word(days))
        } else {
            format!("{} {} left.", days, day_word(days))
        }
    }

    /// Short signed count shown next to an event in a list
    pub fn badge(&self) -> String {
        format!("{} {}", self.remaining_days, day_word(self.remaining_days))
    }
}

impl std::fmt::Display for Expiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

fn day_word(days: i64) -> &'static str {
    if days.abs() == 1 {
        "day"
    } else {
        "days"
    }
}

/// An event together with its classification for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStatus {
    #[serde(flatten)]
    pub event: Event,
    #[serde(flatten)]
    pub expiration: Expiration,
}

impl EventStatus {
    pub fn new(event: Event, today: NaiveDate) -> Self {
        let expiration = classify(event.expiration_date, today);
        Self { event, expiration }
    }
}
