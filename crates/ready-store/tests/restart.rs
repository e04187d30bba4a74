//! State written by one run is restored by the next.

use pretty_assertions::assert_eq;
use ready_core::{Action, AnswerValue, Catalog, Environment, Quiz, VerdictLadder};
use ready_store::{ANSWERS_KEY, QuizStore, STEP_KEY};

fn answer(id: &str, value: AnswerValue) -> Action {
    Action::Answer {
        item_id: id.to_string(),
        value,
    }
}

#[test]
fn state_survives_a_restart() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    {
        let mut store = QuizStore::open_dir(tmp.path());
        let mut quiz = Quiz::new(Catalog::standard(), store.restore(), &mut store);
        quiz.apply(answer("1.1", AnswerValue::Yes)).expect("answer");
        quiz.apply(answer("3.3", AnswerValue::No)).expect("answer");
        quiz.apply(Action::SetName("Jane Smith".into())).expect("name");
        quiz.apply(Action::SetConsent(true)).expect("consent");
        quiz.apply(Action::JumpTo(5)).expect("jump");
    }

    let store = QuizStore::open_dir(tmp.path());
    let quiz = Quiz::new(Catalog::standard(), store.restore(), ready_core::NullSink);
    let state = quiz.state();
    assert_eq!(state.answers.len(), 2);
    assert_eq!(state.answers["3.3"], AnswerValue::No);
    assert_eq!(state.name, "Jane Smith");
    assert!(state.consent);
    assert_eq!(state.step, 5);
    assert!(quiz.is_identity_step());
    assert!(!state.submitted);
}

#[test]
fn corrupted_file_falls_back_without_error() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join(format!("{ANSWERS_KEY}.json")), "{\"1.1\": Yes}")
        .expect("write corrupt answers");
    std::fs::write(tmp.path().join(format!("{STEP_KEY}.json")), "99").expect("write step");

    let store = QuizStore::open_dir(tmp.path());
    let quiz = Quiz::new(Catalog::standard(), store.restore(), ready_core::NullSink);
    assert!(quiz.state().answers.is_empty());
    // Out-of-range step is clamped to the identity step.
    assert_eq!(quiz.state().step, 5);
}

#[test]
fn stored_answers_for_unknown_items_never_reach_the_payload() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(
        tmp.path().join(format!("{ANSWERS_KEY}.json")),
        r#"{"1.1":"Yes","9.9":"Yes"}"#,
    )
    .expect("write answers");

    let store = QuizStore::open_dir(tmp.path());
    let quiz = Quiz::new(Catalog::standard(), store.restore(), ready_core::NullSink);
    let env = Environment::capture("https://example.com/");
    let payload = quiz.payload(&VerdictLadder::standard(), &env);

    assert_eq!(payload.answers.keys().collect::<Vec<_>>(), vec!["1.1"]);
    assert!((payload.scores.total - 1.0).abs() < f64::EPSILON);
}

#[test]
fn reset_overwrites_every_key() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut store = QuizStore::open_dir(tmp.path());
    {
        let mut quiz = Quiz::new(Catalog::standard(), store.restore(), &mut store);
        quiz.apply(answer("2.2", AnswerValue::InProgress)).expect("answer");
        quiz.apply(Action::SetEmail("jane@company.com".into())).expect("email");
        quiz.apply(Action::Reset).expect("reset");
    }

    let answers = std::fs::read_to_string(tmp.path().join(format!("{ANSWERS_KEY}.json")))
        .expect("answers file");
    assert_eq!(answers, "{}");
    assert_eq!(store.restore(), ready_core::QuizState::default());
}
