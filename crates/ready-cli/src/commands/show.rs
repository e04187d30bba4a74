use ready_core::{AnswerValue, Identity, Quiz, StateSink};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// What the checklist shows at the current step.
#[derive(Debug, Serialize)]
pub struct StepView {
    pub step: usize,
    pub identity_step: usize,
    /// Percent of all items answered.
    pub completion: u8,
    #[serde(flatten)]
    pub section: Option<SectionHeader>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemView>,
    #[serde(flatten)]
    pub identity: Option<Identity>,
}

#[derive(Debug, Serialize)]
pub struct SectionHeader {
    pub section: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub why: &'static str,
    pub answer: Option<AnswerValue>,
}

/// Build the view for the quiz's current step.
pub fn step_view<S: StateSink>(quiz: &Quiz<S>) -> StepView {
    let state = quiz.state();
    let scorecard = quiz.scorecard();

    let (section, items, identity) = match quiz.current_section() {
        Some(section) => {
            let line = scorecard.sections.iter().find(|line| line.id == section.id);
            let header = SectionHeader {
                section: section.id,
                title: section.title,
                subtitle: section.subtitle,
                answered: line.map_or(0, |line| line.answered),
                total: section.item_count(),
            };
            let items = section
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id,
                    title: item.title,
                    question: item.question,
                    why: item.why,
                    answer: state.answers.get(item.id).copied(),
                })
                .collect();
            (Some(header), items, None)
        }
        None => (None, Vec::new(), Some(state.identity())),
    };

    StepView {
        step: state.step,
        identity_step: quiz.identity_step(),
        completion: scorecard.completion,
        section,
        items,
        identity,
    }
}

/// Handle `aiready show`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let quiz = ctx.quiz();
    output(&step_view(&quiz), flags.format)
}
