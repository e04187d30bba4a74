//! Checklist state machine.
//!
//! All mutation goes through [`Quiz::apply`]. After an action is accepted the
//! quiz tells its [`StateSink`] which persisted fields changed, so storage is
//! an injected collaborator instead of ambient global state.
//!
//! ```text
//! step 0 ──next──▶ step 1 ──next──▶ … ──next──▶ step N (identity)
//!        ◀──back──        ◀──back──     ◀──back──
//! ```
//!
//! `N` is the section count. Steps are clamped to `0..=N`.

use serde::{Deserialize, Serialize};

use crate::answer::{AnswerValue, Answers};
use crate::catalog::{Catalog, Section};
use crate::errors::CoreError;
use crate::identity::Identity;
use crate::payload::{Environment, Payload};
use crate::scoring::Scorecard;
use crate::verdict::{Verdict, VerdictLadder};

/// Fields that survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistedField {
    Answers,
    Name,
    Email,
    Consent,
    Step,
}

impl PersistedField {
    pub const ALL: [Self; 5] = [
        Self::Answers,
        Self::Name,
        Self::Email,
        Self::Consent,
        Self::Step,
    ];
}

/// Receives the state after each accepted mutation.
pub trait StateSink {
    fn persist(&mut self, field: PersistedField, state: &QuizState);
}

/// Sink that drops every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StateSink for NullSink {
    fn persist(&mut self, _field: PersistedField, _state: &QuizState) {}
}

impl<S: StateSink + ?Sized> StateSink for &mut S {
    fn persist(&mut self, field: PersistedField, state: &QuizState) {
        (**self).persist(field, state);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub answers: Answers,
    pub name: String,
    pub email: String,
    pub consent: bool,
    pub step: usize,
    /// A submission is in flight. Never persisted.
    #[serde(skip)]
    pub submitting: bool,
    /// The last submission succeeded. Never persisted.
    #[serde(skip)]
    pub submitted: bool,
    /// Message from the last failed submission. Never persisted.
    #[serde(skip)]
    pub error: Option<String>,
}

impl QuizState {
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            email: self.email.clone(),
            consent: self.consent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Answer { item_id: String, value: AnswerValue },
    SetName(String),
    SetEmail(String),
    SetConsent(bool),
    Next,
    Back,
    JumpTo(usize),
    Reset,
    BeginSubmit,
    /// `Err` carries the message to show next to the form.
    FinishSubmit(Result<(), String>),
}

pub struct Quiz<S: StateSink> {
    catalog: Catalog,
    state: QuizState,
    sink: S,
}

impl<S: StateSink> Quiz<S> {
    /// Wrap restored state. An out-of-range step is clamped and answers to
    /// ids outside the catalog are dropped, neither of which is persisted.
    pub fn new(catalog: Catalog, mut state: QuizState, sink: S) -> Self {
        state.step = state.step.min(catalog.section_count());
        state.answers.retain(|item_id, _| {
            let known = catalog.contains_item(item_id);
            if !known {
                tracing::warn!(item_id = %item_id, "dropping stored answer for unknown item");
            }
            known
        });
        Self {
            catalog,
            state,
            sink,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The step that shows the identity form.
    #[must_use]
    pub const fn identity_step(&self) -> usize {
        self.catalog.section_count()
    }

    #[must_use]
    pub const fn is_identity_step(&self) -> bool {
        self.state.step == self.identity_step()
    }

    /// Section shown at the current step, `None` on the identity step.
    #[must_use]
    pub fn current_section(&self) -> Option<&'static Section> {
        self.catalog.section(self.state.step)
    }

    #[must_use]
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::compute(&self.catalog, &self.state.answers)
    }

    #[must_use]
    pub fn verdict<'a>(&self, ladder: &'a VerdictLadder) -> &'a Verdict {
        ladder.classify(self.scorecard().total)
    }

    #[must_use]
    pub fn payload(&self, ladder: &VerdictLadder, env: &Environment) -> Payload {
        Payload::build(
            &self.catalog,
            &self.state.identity(),
            &self.state.answers,
            ladder,
            env,
        )
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownItem`] for an answer to an id outside the
    /// catalog and [`CoreError::SubmitInFlight`] when a submission is started
    /// twice. Rejected actions leave state and storage untouched.
    pub fn apply(&mut self, action: Action) -> Result<(), CoreError> {
        let changed: &[PersistedField] = match action {
            Action::Answer { item_id, value } => {
                if !self.catalog.contains_item(&item_id) {
                    return Err(CoreError::UnknownItem(item_id));
                }
                if self.state.answers.get(&item_id) == Some(&value) {
                    &[]
                } else {
                    self.state.answers.insert(item_id, value);
                    &[PersistedField::Answers]
                }
            }
            Action::SetName(name) => {
                if self.state.name == name {
                    &[]
                } else {
                    self.state.name = name;
                    &[PersistedField::Name]
                }
            }
            Action::SetEmail(email) => {
                if self.state.email == email {
                    &[]
                } else {
                    self.state.email = email;
                    &[PersistedField::Email]
                }
            }
            Action::SetConsent(consent) => {
                if self.state.consent == consent {
                    &[]
                } else {
                    self.state.consent = consent;
                    &[PersistedField::Consent]
                }
            }
            Action::Next => self.move_to(self.state.step.saturating_add(1)),
            Action::Back => self.move_to(self.state.step.saturating_sub(1)),
            Action::JumpTo(step) => self.move_to(step),
            Action::Reset => {
                self.state = QuizState::default();
                &PersistedField::ALL
            }
            Action::BeginSubmit => {
                if self.state.submitting {
                    return Err(CoreError::SubmitInFlight);
                }
                self.state.submitting = true;
                self.state.error = None;
                &[]
            }
            Action::FinishSubmit(outcome) => {
                self.state.submitting = false;
                match outcome {
                    Ok(()) => {
                        self.state.submitted = true;
                        self.state.error = None;
                    }
                    Err(message) => self.state.error = Some(message),
                }
                &[]
            }
        };

        for field in changed {
            self.sink.persist(*field, &self.state);
        }
        Ok(())
    }

    fn move_to(&mut self, step: usize) -> &'static [PersistedField] {
        let clamped = step.min(self.identity_step());
        if clamped == self.state.step {
            return &[];
        }
        tracing::debug!(from = self.state.step, to = clamped, "step changed");
        self.state.step = clamped;
        &[PersistedField::Step]
    }
}
