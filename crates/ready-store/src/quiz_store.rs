//! Checklist state persistence.
//!
//! Five keys, each holding plain JSON: the answer map, name, email, consent
//! flag and current step. The key names match the ones the hosted checklist
//! used in browser storage, so exported state files stay recognizable.

use ready_core::{Answers, PersistedField, QuizState, StateSink};

use crate::backend::KeyValueBackend;
use crate::cache::JsonCache;

pub const ANSWERS_KEY: &str = "ai_mops_answers_prod";
pub const NAME_KEY: &str = "ai_mops_name_prod";
pub const EMAIL_KEY: &str = "ai_mops_email_prod";
pub const CONSENT_KEY: &str = "ai_mops_consent_prod";
pub const STEP_KEY: &str = "ai_mops_step_prod";

#[must_use]
pub const fn key_for(field: PersistedField) -> &'static str {
    match field {
        PersistedField::Answers => ANSWERS_KEY,
        PersistedField::Name => NAME_KEY,
        PersistedField::Email => EMAIL_KEY,
        PersistedField::Consent => CONSENT_KEY,
        PersistedField::Step => STEP_KEY,
    }
}

/// Persistence sink for [`ready_core::Quiz`].
#[derive(Debug, Clone)]
pub struct QuizStore<B> {
    cache: JsonCache<B>,
}

impl<B: KeyValueBackend> QuizStore<B> {
    pub const fn new(backend: B) -> Self {
        Self {
            cache: JsonCache::new(backend),
        }
    }

    pub const fn cache(&self) -> &JsonCache<B> {
        &self.cache
    }

    /// Rebuild state from storage. Each key falls back to its default on its
    /// own, so one corrupt key does not discard the others.
    ///
    /// The step is returned as stored; [`ready_core::Quiz::new`] clamps it.
    pub fn restore(&self) -> QuizState {
        QuizState {
            answers: self.cache.load_or(ANSWERS_KEY, Answers::new()),
            name: self.cache.load_or(NAME_KEY, String::new()),
            email: self.cache.load_or(EMAIL_KEY, String::new()),
            consent: self.cache.load_or(CONSENT_KEY, false),
            step: self.cache.load_or(STEP_KEY, 0_usize),
            ..QuizState::default()
        }
    }
}

impl<B: KeyValueBackend> StateSink for QuizStore<B> {
    fn persist(&mut self, field: PersistedField, state: &QuizState) {
        let key = key_for(field);
        tracing::debug!(key, "persisting field");
        match field {
            PersistedField::Answers => self.cache.save(key, &state.answers),
            PersistedField::Name => self.cache.save(key, &state.name),
            PersistedField::Email => self.cache.save(key, &state.email),
            PersistedField::Consent => self.cache.save(key, &state.consent),
            PersistedField::Step => self.cache.save(key, &state.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ready_core::{Action, AnswerValue, Catalog, Quiz};

    use super::*;
    use crate::backend::MemoryBackend;

    #[test]
    fn restore_from_empty_store_is_default() {
        let store = QuizStore::new(MemoryBackend::new());
        assert_eq!(store.restore(), QuizState::default());
    }

    #[test]
    fn one_corrupt_key_keeps_the_rest() {
        let backend = MemoryBackend::new()
            .with_raw(ANSWERS_KEY, "[[[")
            .with_raw(NAME_KEY, "\"Jane\"")
            .with_raw(CONSENT_KEY, "true")
            .with_raw(STEP_KEY, "-4");
        let state = QuizStore::new(backend).restore();

        assert!(state.answers.is_empty());
        assert_eq!(state.name, "Jane");
        assert!(state.consent);
        // A negative step cannot decode as usize and falls back to 0.
        assert_eq!(state.step, 0);
    }

    #[test]
    fn unknown_answer_literal_drops_the_answer_map() {
        let backend = MemoryBackend::new().with_raw(ANSWERS_KEY, r#"{"1.1":"Maybe"}"#);
        assert!(QuizStore::new(backend).restore().answers.is_empty());
    }

    #[test]
    fn quiz_mutations_are_mirrored_per_key() {
        let mut store = QuizStore::new(MemoryBackend::new());
        {
            let mut quiz = Quiz::new(Catalog::standard(), store.restore(), &mut store);
            quiz.apply(Action::Answer {
                item_id: "1.1".into(),
                value: AnswerValue::InProgress,
            })
            .expect("answer");
            quiz.apply(Action::SetEmail("jane@company.com".into()))
                .expect("email");
            quiz.apply(Action::Next).expect("next");
        }

        let backend = store.cache().backend();
        assert_eq!(
            backend.get_raw(ANSWERS_KEY).expect("read").as_deref(),
            Some(r#"{"1.1":"In-Progress"}"#)
        );
        assert_eq!(
            backend.get_raw(EMAIL_KEY).expect("read").as_deref(),
            Some("\"jane@company.com\"")
        );
        assert_eq!(backend.get_raw(STEP_KEY).expect("read").as_deref(), Some("1"));
        assert_eq!(backend.get_raw(NAME_KEY).expect("read"), None);

        let restored = store.restore();
        assert_eq!(restored.answers["1.1"], AnswerValue::InProgress);
        assert_eq!(restored.step, 1);
    }
}
