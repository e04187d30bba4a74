use std::fmt::Write as _;

use ready_core::{Scorecard, Verdict};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// The results screen: total, verdict and per-section breakdown.
#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub score: String,
    pub verdict: String,
    pub tone: String,
    pub sections: Vec<SectionLine>,
    pub schedule_url: String,
}

#[derive(Debug, Serialize)]
pub struct SectionLine {
    pub title: String,
    pub score: String,
}

impl ResultsView {
    #[must_use]
    pub fn new(scorecard: &Scorecard, verdict: &Verdict, schedule_url: &str) -> Self {
        Self {
            score: format!("{:.1} / {}", scorecard.total, scorecard.max),
            verdict: format!("{} {}", verdict.emoji, verdict.label),
            tone: verdict.tone.clone(),
            sections: scorecard
                .sections
                .iter()
                .map(|line| SectionLine {
                    title: line.title.clone(),
                    score: format!("{:.1} / {}", line.score, line.items),
                })
                .collect(),
            schedule_url: schedule_url.to_string(),
        }
    }

    /// Plain-text rendering used by `--format raw`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Your Score: {}", self.score);
        let _ = writeln!(out, "Verdict: {}", self.verdict);
        let _ = writeln!(out, "{}", self.tone);
        let _ = writeln!(out);
        let _ = writeln!(out, "Section Breakdown");
        for line in &self.sections {
            let _ = writeln!(out, "  - {}: {}", line.title, line.score);
        }
        let _ = writeln!(out);
        let _ = write!(out, "Schedule My Call: {}", self.schedule_url);
        out
    }
}

/// Handle `aiready results`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ladder = ctx.ladder.clone();
    let schedule_url = ctx.config.links.schedule_url.clone();
    let quiz = ctx.quiz();
    let scorecard = quiz.scorecard();
    let view = ResultsView::new(&scorecard, ladder.classify(scorecard.total), &schedule_url);

    match flags.format {
        OutputFormat::Raw => {
            println!("{}", view.to_text());
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Table => output(&view, flags.format),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ready_core::{AnswerValue, Answers, Catalog, VerdictLadder};

    use super::ResultsView;

    fn view(answers: &Answers) -> ResultsView {
        let scorecard = ready_core::Scorecard::compute(&Catalog::standard(), answers);
        let ladder = VerdictLadder::standard();
        ResultsView::new(
            &scorecard,
            ladder.classify(scorecard.total),
            ready_core::DEFAULT_SCHEDULE_URL,
        )
    }

    #[test]
    fn scores_use_one_decimal() {
        let mut answers = Answers::new();
        answers.insert("1.1".into(), AnswerValue::Yes);
        answers.insert("1.2".into(), AnswerValue::InProgress);

        let view = view(&answers);
        assert_eq!(view.score, "1.5 / 16");
        assert_eq!(view.sections[0].score, "1.5 / 4");
        assert_eq!(view.sections[1].score, "0.0 / 3");
        assert_eq!(view.verdict, "🔧 Stabilize First");
    }

    #[test]
    fn text_rendering_lists_every_section() {
        let answers: Answers = Catalog::standard()
            .items()
            .map(|item| (item.id.to_string(), AnswerValue::Yes))
            .collect();

        let text = view(&answers).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Your Score: 16.0 / 16");
        assert_eq!(lines[1], "Verdict: ✅ AI-Ready Accelerator");
        assert_eq!(lines.iter().filter(|line| line.starts_with("  - ")).count(), 5);
        assert!(text.ends_with("https://tidycal.com/tonyawalker/20-minute-strategy-session"));
    }
}
