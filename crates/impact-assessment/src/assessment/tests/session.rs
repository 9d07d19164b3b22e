use std::collections::BTreeMap;
use std::sync::Arc;

use super::common::*;

use crate::assessment::answers::AnswerError;
use crate::assessment::domain::Answer;
use crate::assessment::scoring::MIN_SCORE;
use crate::assessment::session::{AssessmentSession, SessionError, SessionNotice};
use crate::assessment::store::{
    AnswerSlotStore, FileSlotStore, MemorySlotStore, PersistedAnswers, SlotKey,
    CATALOG_SCHEMA_VERSION,
};

const RESPONDENT: &str = "x@example.com";

#[test]
fn fresh_respondent_starts_empty_without_notices() {
    let store = Arc::new(MemorySlotStore::new());
    let session = AssessmentSession::open(RESPONDENT, engine(), store);

    assert!(session.answers().is_empty());
    assert!(session.notices().is_empty());
    assert_eq!(session.saved_at(), None);
    assert_eq!(session.slot_key().as_str(), "evaluationData_x@example.com");
}

#[test]
fn every_answer_is_written_through_to_the_slot() {
    let store = Arc::new(MemorySlotStore::new());
    let mut session = AssessmentSession::open(RESPONDENT, engine(), store.clone());

    let receipt = session.answer("q13", yes()).expect("valid answer");

    assert!(receipt.persisted);
    assert_eq!(receipt.total_score, MIN_SCORE);
    assert!(receipt.completion_pct > 0.0);

    let saved = store
        .load(&SlotKey::for_respondent(RESPONDENT))
        .expect("load")
        .expect("slot written");
    assert_eq!(saved.answers.get("q13"), Some(&yes()));
    assert_eq!(saved.schema_version, CATALOG_SCHEMA_VERSION);
    assert_eq!(session.saved_at(), Some(saved.timestamp));
}

#[test]
fn clearing_an_answer_rewrites_the_slot() {
    let store = Arc::new(MemorySlotStore::new());
    let mut session = AssessmentSession::open(RESPONDENT, engine(), store.clone());
    session.answer("q13", yes()).expect("answer");

    let receipt = session.clear("q13").expect("clear");

    assert_eq!(receipt.completion_pct, 0.0);
    let saved = store
        .load(&SlotKey::for_respondent(RESPONDENT))
        .expect("load")
        .expect("slot written");
    assert!(saved.answers.is_empty());
}

#[test]
fn rejected_answers_leave_the_sheet_untouched() {
    let store = Arc::new(MemorySlotStore::new());
    let mut session = AssessmentSession::open(RESPONDENT, engine(), store.clone());

    let err = session
        .answer("q999", yes())
        .expect_err("unknown question");

    assert!(matches!(
        err,
        SessionError::Answer(AnswerError::UnknownQuestion(ref id)) if id == "q999"
    ));
    assert!(session.answers().is_empty());
    assert!(store.is_empty());
}

#[test]
fn failed_writes_become_notices_and_the_session_continues() {
    let mut session = AssessmentSession::open(RESPONDENT, engine(), Arc::new(ReadOnlyStore));
    assert!(session.notices().is_empty());

    let receipt = session.answer("q14", no()).expect("answer accepted");

    assert!(!receipt.persisted);
    assert_eq!(session.answers().get("q14"), &no());
    assert!((session.evaluate().score.raw_total - 5.55).abs() < EPSILON);

    let notices = session.take_notices();
    assert!(matches!(notices.as_slice(), [SessionNotice::WriteFailed(_)]));
    assert!(session.notices().is_empty());

    assert!(matches!(session.save(), Err(SessionError::Store(_))));
    assert!(session.writes_through());
}

#[test]
fn unreadable_slot_is_not_written_by_later_answers() {
    let mut session = AssessmentSession::open(RESPONDENT, engine(), Arc::new(UnavailableStore));
    assert!(matches!(
        session.notices(),
        [SessionNotice::LoadFailed(_)]
    ));
    assert!(!session.writes_through());

    let receipt = session.answer("q14", no()).expect("answer accepted");

    assert!(!receipt.persisted);
    assert_eq!(session.answers().get("q14"), &no());
    assert_eq!(session.notices().len(), 1);

    assert!(matches!(session.save(), Err(SessionError::Store(_))));
    assert!(!session.writes_through());
}

#[test]
fn one_undecodable_value_does_not_discard_the_rest_of_the_slot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileSlotStore::new(dir.path()));
    let key = SlotKey::for_respondent(RESPONDENT);
    std::fs::write(
        store.path_for(&key),
        r#"{"answers":{"q5":true,"q6":true,"q13":true,"q99":5},"timestamp":1700000000000,"schema_version":1}"#,
    )
    .expect("seed slot");

    let mut session = AssessmentSession::open(RESPONDENT, engine(), store.clone());

    assert_eq!(session.answers().len(), 3);
    assert_eq!(session.answers().get("q13"), &yes());
    assert!(matches!(
        session.notices(),
        [SessionNotice::DroppedAnswer(detail)] if detail.contains("q99")
    ));

    let receipt = session.answer("q7", no()).expect("answer");

    assert!(receipt.persisted);
    let saved = store.load(&key).expect("load").expect("slot present");
    assert_eq!(
        saved.answers.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["q13", "q5", "q6", "q7"]
    );
}

#[test]
fn malformed_slot_survives_until_an_explicit_save() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileSlotStore::new(dir.path()));
    let key = SlotKey::for_respondent(RESPONDENT);
    std::fs::write(store.path_for(&key), b"{not json").expect("seed slot");

    let mut session = AssessmentSession::open(RESPONDENT, engine(), store.clone());
    assert!(matches!(session.notices(), [SessionNotice::LoadFailed(_)]));

    let receipt = session.answer("q7", no()).expect("answer");

    assert!(!receipt.persisted);
    assert_eq!(
        std::fs::read(store.path_for(&key)).expect("slot still there"),
        b"{not json"
    );

    session.save().expect("explicit save");
    assert!(session.writes_through());
    assert!(session.answer("q8", no()).expect("answer").persisted);

    let saved = store.load(&key).expect("load").expect("slot present");
    assert_eq!(saved.answers.len(), 2);
}

#[test]
fn stale_documents_are_revalidated_on_resume() {
    let store = Arc::new(MemorySlotStore::new());
    let mut answers = BTreeMap::new();
    answers.insert("q5".to_string(), yes());
    answers.insert("q6".to_string(), Answer::NotApplicable);
    answers.insert("q_retired".to_string(), yes());
    let legacy = PersistedAnswers {
        answers,
        timestamp: 1_700_000_000_000,
        schema_version: 0,
        unreadable: BTreeMap::new(),
    };
    store
        .save(&SlotKey::for_respondent(RESPONDENT), &legacy)
        .expect("seed slot");

    let session = AssessmentSession::open(RESPONDENT, engine(), store);

    assert_eq!(session.answers().len(), 1);
    assert_eq!(session.answers().get("q5"), &yes());
    assert_eq!(session.saved_at(), Some(1_700_000_000_000));

    let notices = session.notices();
    assert_eq!(
        notices[0],
        SessionNotice::StaleSchema {
            found: 0,
            expected: CATALOG_SCHEMA_VERSION,
        }
    );
    assert_eq!(
        notices
            .iter()
            .filter(|notice| matches!(notice, SessionNotice::DroppedAnswer(_)))
            .count(),
        2
    );
}

#[test]
fn reload_picks_up_changes_written_elsewhere() {
    let store = Arc::new(MemorySlotStore::new());
    let engine = engine();
    let mut first = AssessmentSession::open(RESPONDENT, engine.clone(), store.clone());
    let mut second = AssessmentSession::open(RESPONDENT, engine, store);

    first.answer("q24", yes()).expect("answer");
    assert!(second.answers().is_empty());

    second.reload();

    assert_eq!(second.answers(), first.answers());
}

#[test]
fn resumed_session_evaluates_like_the_uninterrupted_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileSlotStore::new(dir.path()));
    let engine = engine();

    let mut original = AssessmentSession::open(RESPONDENT, engine.clone(), store.clone());
    for (question_id, answer) in [
        ("q1", text("Asistente de becas")),
        ("q7", no()),
        ("q8", no()),
        ("q15", no()),
        ("q32", text("No")),
        ("q50", Answer::NotApplicable),
    ] {
        original.answer(question_id, answer).expect("answer");
    }
    let expected = original.evaluate();
    drop(original);

    let resumed = AssessmentSession::open(RESPONDENT, engine, store);

    assert!(resumed.notices().is_empty());
    assert_eq!(resumed.evaluate(), expected);
}
