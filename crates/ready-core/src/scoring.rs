//! Scoring engine.
//!
//! Every function here is a pure function of the catalog and the current
//! answers. Nothing is cached; callers recompute after each change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::answer::Answers;
use crate::catalog::{Catalog, Section};

/// Sum of answer points over the items of one section. Unanswered items count 0.
#[must_use]
pub fn section_score(section: &Section, answers: &Answers) -> f64 {
    section
        .items
        .iter()
        .filter_map(|item| answers.get(item.id))
        .map(|answer| answer.score())
        .sum()
}

/// Section id to section score, for every section in the catalog.
#[must_use]
pub fn section_scores(catalog: &Catalog, answers: &Answers) -> BTreeMap<String, f64> {
    catalog
        .sections()
        .iter()
        .map(|section| (section.id.to_string(), section_score(section, answers)))
        .collect()
}

#[must_use]
pub fn total_score(catalog: &Catalog, answers: &Answers) -> f64 {
    catalog
        .sections()
        .iter()
        .map(|section| section_score(section, answers))
        .sum()
}

/// Highest reachable total: one point per item.
#[must_use]
pub fn max_score(catalog: &Catalog) -> usize {
    catalog.item_count()
}

#[must_use]
pub fn answered_in_section(section: &Section, answers: &Answers) -> usize {
    section
        .items
        .iter()
        .filter(|item| answers.contains_key(item.id))
        .count()
}

/// Number of catalog items that have an answer.
#[must_use]
pub fn answered_count(catalog: &Catalog, answers: &Answers) -> usize {
    catalog
        .sections()
        .iter()
        .map(|section| answered_in_section(section, answers))
        .sum()
}

/// Share of answered items as a whole percentage, rounded half up.
#[must_use]
pub fn completion_percent(catalog: &Catalog, answers: &Answers) -> u8 {
    percent(answered_count(catalog, answers), catalog.item_count())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percent(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let ratio = (numerator as f64 / denominator as f64) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Score line for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub id: String,
    pub title: String,
    pub score: f64,
    pub answered: usize,
    pub items: usize,
}

/// Every derived number for one answers snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub total: f64,
    pub max: usize,
    pub answered: usize,
    pub completion: u8,
    pub sections: Vec<SectionScore>,
}

impl Scorecard {
    #[must_use]
    pub fn compute(catalog: &Catalog, answers: &Answers) -> Self {
        let sections: Vec<SectionScore> = catalog
            .sections()
            .iter()
            .map(|section| SectionScore {
                id: section.id.to_string(),
                title: section.title.to_string(),
                score: section_score(section, answers),
                answered: answered_in_section(section, answers),
                items: section.item_count(),
            })
            .collect();

        let total = sections.iter().map(|s| s.score).sum();
        let answered = sections.iter().map(|s| s.answered).sum();

        Self {
            total,
            max: max_score(catalog),
            answered,
            completion: completion_percent(catalog, answers),
            sections,
        }
    }
}
