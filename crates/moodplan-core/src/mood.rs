//! User-reported mood.
//!
//! The mood set is closed. Anything the user types that is not one of the
//! known moods collapses to [`Mood::Ok`], so parsing never fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated affective state driving scoring bias and reordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mood {
    Tired,
    #[default]
    Ok,
    Motivated,
    Stressed,
    Anxious,
    Overwhelmed,
    Relaxed,
}

impl Mood {
    /// All moods in code order.
    pub const ALL: [Mood; 7] = [
        Mood::Tired,
        Mood::Ok,
        Mood::Motivated,
        Mood::Stressed,
        Mood::Anxious,
        Mood::Overwhelmed,
        Mood::Relaxed,
    ];

    /// Parse a free-form mood string.
    ///
    /// Exact, case-sensitive match against the lowercase names. Anything
    /// else maps to [`Mood::Ok`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "tired" => Mood::Tired,
            "motivated" => Mood::Motivated,
            "stressed" => Mood::Stressed,
            "anxious" => Mood::Anxious,
            "overwhelmed" => Mood::Overwhelmed,
            "relaxed" => Mood::Relaxed,
            // "ok" and everything unrecognized
            _ => Mood::Ok,
        }
    }

    /// Numeric code used as a model feature.
    pub fn code(self) -> u8 {
        match self {
            Mood::Tired => 0,
            Mood::Ok => 1,
            Mood::Motivated => 2,
            Mood::Stressed => 3,
            Mood::Anxious => 4,
            Mood::Overwhelmed => 5,
            Mood::Relaxed => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Tired => "tired",
            Mood::Ok => "ok",
            Mood::Motivated => "motivated",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Relaxed => "relaxed",
        }
    }
}

impl From<String> for Mood {
    fn from(raw: String) -> Self {
        Mood::parse(&raw)
    }
}

impl From<&str> for Mood {
    fn from(raw: &str) -> Self {
        Mood::parse(raw)
    }
}

impl FromStr for Mood {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mood::parse(s))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
