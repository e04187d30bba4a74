//! Payload assembly.
//!
//! A payload is the snapshot sent to the lead-capture webhook and written to
//! CSV. It is built fresh for every export or submission from the current
//! state plus an [`Environment`] captured at call time.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answer::Answers;
use crate::catalog::Catalog;
use crate::identity::Identity;
use crate::scoring;
use crate::verdict::{Verdict, VerdictLadder};

/// Ambient data read when a payload is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub now: DateTime<Utc>,
    /// Page the checklist was reached from. Its query string is kept for attribution.
    pub page_url: String,
}

impl Environment {
    /// Snapshot the clock now.
    #[must_use]
    pub fn capture(page_url: impl Into<String>) -> Self {
        Self {
            now: Utc::now(),
            page_url: page_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreTotals {
    pub total: f64,
    pub max: usize,
}

/// Exportable and submittable snapshot of the checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub consent: bool,
    pub scores: ScoreTotals,
    pub section_scores: BTreeMap<String, f64>,
    pub answers: Answers,
    pub verdict: Verdict,
    pub url: String,
    /// Decoded query-string parameters of `url`.
    pub utm: BTreeMap<String, String>,
}

impl Payload {
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        identity: &Identity,
        answers: &Answers,
        ladder: &VerdictLadder,
        env: &Environment,
    ) -> Self {
        let total = scoring::total_score(catalog, answers);
        Self {
            timestamp: format_timestamp(env.now),
            name: identity.name.clone(),
            email: identity.email.clone(),
            consent: identity.consent,
            scores: ScoreTotals {
                total,
                max: scoring::max_score(catalog),
            },
            section_scores: scoring::section_scores(catalog, answers),
            answers: answers.clone(),
            verdict: ladder.classify(total).clone(),
            url: env.page_url.clone(),
            utm: query_params(&env.page_url),
        }
    }

    /// `YYYY-MM-DD` prefix of the timestamp.
    #[must_use]
    pub fn date(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}

/// Format like `2026-10-17T09:30:00.000Z`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Split the query string of `url` into decoded key/value pairs.
///
/// Follows form-urlencoded rules: `+` is a space, pairs without `=` map to an
/// empty value, empty segments are skipped, and the last duplicate key wins.
/// Anything after `#` is ignored.
#[must_use]
pub fn query_params(url: &str) -> BTreeMap<String, String> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let Some((_, query)) = without_fragment.split_once('?') else {
        return BTreeMap::new();
    };

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            tracing::debug!(%error, raw, "query component is not valid UTF-8; keeping it verbatim");
            spaced
        }
    }
}

/// JSON Schema describing the payload body posted to the webhook.
#[must_use]
pub fn payload_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(Payload)).unwrap_or_default()
}
