//! Answer values and the answer map.
//!
//! Answers serialize as the literal option labels (`"Yes"`, `"In-Progress"`,
//! `"No"`) so persisted state and webhook payloads stay readable by anything
//! that consumed the original checklist.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Map of item id to the chosen answer. Absence means unanswered.
pub type Answers = BTreeMap<String, AnswerValue>;

/// One of the three options offered for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AnswerValue {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "In-Progress")]
    InProgress,
    #[serde(rename = "No")]
    No,
}

impl AnswerValue {
    /// All options in display order.
    pub const ALL: [Self; 3] = [Self::Yes, Self::InProgress, Self::No];

    /// Points contributed to the section score.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::InProgress => 0.5,
            Self::No => 0.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::InProgress => "In-Progress",
            Self::No => "No",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerValue {
    type Err = CoreError;

    /// Accepts the display labels case-insensitively, plus `in_progress`,
    /// `inprogress` and `partial` for `In-Progress`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "in-progress" | "in_progress" | "inprogress" | "partial" => Ok(Self::InProgress),
            "no" | "n" => Ok(Self::No),
            _ => Err(CoreError::InvalidAnswer(value.to_string())),
        }
    }
}
