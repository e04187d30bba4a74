//! Verdict classification.
//!
//! A verdict ladder is an ordered list of `(lower bound, verdict)` bands.
//! Bands are checked from the highest bound down and the first band whose
//! bound is `<=` the total wins. Totals below every band get the floor verdict.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome shown for a total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub label: String,
    pub emoji: String,
    pub tone: String,
}

impl Verdict {
    #[must_use]
    pub fn new(label: &str, emoji: &str, tone: &str) -> Self {
        Self {
            label: label.to_string(),
            emoji: emoji.to_string(),
            tone: tone.to_string(),
        }
    }
}

/// One rung of the ladder. `lower_bound` is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub lower_bound: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictLadder {
    bands: Vec<Band>,
    floor: Verdict,
}

impl Default for VerdictLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl VerdictLadder {
    /// Build a ladder from bands in any order.
    #[must_use]
    pub fn new(bands: Vec<Band>, floor: Verdict) -> Self {
        let mut ladder = Self {
            bands: Vec::with_capacity(bands.len()),
            floor,
        };
        for band in bands {
            ladder.push_band(band);
        }
        ladder
    }

    /// The shipped three-band ladder for a 16-point checklist.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            vec![
                Band {
                    lower_bound: 13.0,
                    verdict: Verdict::new(
                        "AI-Ready Accelerator",
                        "✅",
                        "You’re primed for AI acceleration—book an audit to leap ahead.",
                    ),
                },
                Band {
                    lower_bound: 8.0,
                    verdict: Verdict::new(
                        "Promising but Patchy",
                        "⚠️",
                        "Solid start but foundations are uneven—prioritize fixes before heavy AI spend.",
                    ),
                },
            ],
            Verdict::new(
                "Stabilize First",
                "🔧",
                "Data chaos alert—let’s triage before you waste another dollar.",
            ),
        )
    }

    /// Insert a band, keeping bands sorted by descending lower bound.
    pub fn push_band(&mut self, band: Band) {
        let position = self
            .bands
            .iter()
            .position(|existing| existing.lower_bound < band.lower_bound)
            .unwrap_or(self.bands.len());
        self.bands.insert(position, band);
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// First band whose lower bound the total reaches, else the floor.
    #[must_use]
    pub fn classify(&self, total: f64) -> &Verdict {
        self.bands
            .iter()
            .find(|band| total >= band.lower_bound)
            .map_or(&self.floor, |band| &band.verdict)
    }
}
