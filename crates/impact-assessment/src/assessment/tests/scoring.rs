use super::common::*;

use crate::assessment::answers::AnswerSheet;
use crate::assessment::domain::{Answer, Dimension, ImpactLevel};
use crate::assessment::scoring::MIN_SCORE;

#[test]
fn empty_sheet_scores_the_floor() {
    let engine = engine();
    let report = engine.scoring().score(&AnswerSheet::new());

    assert_eq!(report.raw_total, 0.0);
    assert_eq!(report.total, MIN_SCORE);
    assert_eq!(report.impact_level, ImpactLevel::Low);
    assert_eq!(report.impact_label(), "Bajo impacto");
    assert_eq!(report.scale_position_pct, 0.0);
    assert!(report.by_dimension.values().all(|score| *score == 0.0));
}

#[test]
fn single_weighted_yes_is_lifted_to_the_floor() {
    let engine = engine();
    let answers = sheet(&engine, &[("q13", yes())]);

    let report = engine.scoring().score(&answers);

    assert!((report.raw_total - 5.55).abs() < EPSILON);
    assert_eq!(report.total, MIN_SCORE);
    assert!((report.dimension_score(Dimension::Regulatory) - 5.55).abs() < EPSILON);
}

#[test]
fn weights_follow_the_direction_of_each_rule() {
    let engine = engine();
    // q13 weighs a yes, q14 weighs a no; the opposite answers earn nothing.
    let weighted = sheet(&engine, &[("q13", yes()), ("q14", no())]);
    let unweighted = sheet(&engine, &[("q13", no()), ("q14", yes())]);

    assert!((engine.scoring().score(&weighted).raw_total - 11.1).abs() < EPSILON);
    assert_eq!(engine.scoring().score(&unweighted).raw_total, 0.0);
}

#[test]
fn symmetric_questions_score_either_answer_but_not_silence() {
    let engine = engine();

    let yes_sheet = sheet(&engine, &[("q19", yes())]);
    let no_sheet = sheet(&engine, &[("q19", no())]);

    assert!((engine.scoring().score(&yes_sheet).raw_total - 2.22).abs() < EPSILON);
    assert!((engine.scoring().score(&no_sheet).raw_total - 2.22).abs() < EPSILON);
    assert_eq!(engine.scoring().score(&AnswerSheet::new()).raw_total, 0.0);
}

#[test]
fn select_questions_score_the_chosen_option() {
    let engine = engine();

    let partial = sheet(&engine, &[("q32", text("Si, pero parcialmente"))]);
    let missing = sheet(&engine, &[("q32", text("No"))]);
    let complete = sheet(&engine, &[("q32", text("Si"))]);

    assert!((engine.scoring().score(&partial).raw_total - 0.5).abs() < EPSILON);
    assert!((engine.scoring().score(&missing).raw_total - 1.01).abs() < EPSILON);
    assert_eq!(engine.scoring().score(&complete).raw_total, 0.0);
}

#[test]
fn not_applicable_contributes_nothing() {
    let engine = engine();
    let answers = sheet(&engine, &[("q50", Answer::NotApplicable)]);

    assert_eq!(engine.scoring().score(&answers).raw_total, 0.0);
}

#[test]
fn unscored_questions_never_move_the_total() {
    let engine = engine();
    let answers = sheet(
        &engine,
        &[
            ("q1", text("Asistente de postulación")),
            ("q3", text("uso")),
            ("q52", text(engine.catalog().question("q52").expect("q52").options[0].value)),
        ],
    );

    assert_eq!(engine.scoring().score(&answers).raw_total, 0.0);
}

#[test]
fn totals_above_the_floor_are_classified_by_band() {
    let engine = engine();
    let answers = sheet(
        &engine,
        &[
            ("q13", yes()),
            ("q14", no()),
            ("q15", yes()),
            ("q16", no()),
            ("q17", no()),
            ("q18", no()),
        ],
    );

    let report = engine.scoring().score(&answers);

    assert!((report.total - 22.18).abs() < EPSILON);
    assert_eq!(report.total, report.raw_total);
    assert_eq!(report.impact_level, ImpactLevel::Moderate);
    assert!((report.dimension_score(Dimension::SocialLicense) - 11.08).abs() < EPSILON);
    assert!(report.scale_position_pct > 0.0 && report.scale_position_pct < 10.0);
}

#[test]
fn worst_case_reaches_the_top_of_the_scale() {
    let engine = engine();
    let answers = worst_case_sheet(engine.catalog());

    let report = engine.scoring().score(&answers);

    assert!((report.total - report.max_score).abs() < 1e-6);
    assert_eq!(report.impact_level, ImpactLevel::VeryHigh);
    assert!((report.scale_position_pct - 100.0).abs() < 1e-6);
}

#[test]
fn scoring_is_deterministic_and_never_below_the_floor() {
    let engine = engine();
    let catalog = engine.catalog();

    let all_yes = {
        let mut sheet = AnswerSheet::new();
        for question in catalog.questions() {
            let _ = sheet.record(catalog, question.id, yes());
        }
        sheet
    };
    let all_no = {
        let mut sheet = AnswerSheet::new();
        for question in catalog.questions() {
            let _ = sheet.record(catalog, question.id, no());
        }
        sheet
    };
    let samples = {
        let mut sheet = AnswerSheet::new();
        for question in catalog.questions() {
            sheet
                .record(catalog, question.id, sample_answer(question))
                .expect("sample answer fits");
        }
        sheet
    };

    for answers in [AnswerSheet::new(), all_yes, all_no, samples] {
        let first = engine.scoring().score(&answers);
        let second = engine.scoring().score(&answers);
        assert_eq!(first, second);
        assert!(first.total >= MIN_SCORE);
    }
}

#[test]
fn defective_questions_are_skipped_and_the_rest_still_score() {
    let engine = defective_engine();
    let answers = sheet(
        &engine,
        &[
            ("q1", yes()),
            ("q2", yes()),
            ("q3", text("a")),
            ("q4", no()),
            ("q5", text("b")),
        ],
    );

    let report = engine.scoring().score(&answers);

    // q2 has no rule and q3 has no option scores; q1 + q4 + q5 remain
    assert!((report.raw_total - 9.5).abs() < EPSILON);
    assert!((report.max_score - 9.5).abs() < EPSILON);
    assert!((report.dimension_score(Dimension::Regulatory) - 9.5).abs() < EPSILON);
    assert_eq!(report.total, MIN_SCORE);
    assert_eq!(report.impact_level, ImpactLevel::Low);
}
