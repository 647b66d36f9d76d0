// tests/evaluator_tests.rs

use std::collections::HashMap;

use quiz_backend::{
    models::question::{Choice, Question},
    quiz::{Selection, SubmittedAnswer, evaluate, evaluator::is_correct},
};

fn question(key: &[(&str, bool)]) -> Question {
    Question {
        text: "Pick".to_string(),
        choices: key
            .iter()
            .map(|(letter, correct)| Choice {
                letter: letter.to_string(),
                text: format!("Option {}", letter),
                correct: *correct,
            })
            .collect(),
        ..Default::default()
    }
}

fn answer(letters: &[&str]) -> SubmittedAnswer {
    letters.iter().map(|l| l.to_string()).collect()
}

fn single() -> Question {
    question(&[("A", true), ("B", false)])
}

fn multi() -> Question {
    question(&[("A", true), ("B", true), ("C", false)])
}

#[test]
fn exact_single_answer_is_correct() {
    assert!(is_correct(&single(), &answer(&["A"])));
}

#[test]
fn superset_and_subset_are_incorrect() {
    assert!(!is_correct(&single(), &answer(&["A", "B"])));
    assert!(!is_correct(&multi(), &answer(&["A"])));
}

#[test]
fn order_does_not_matter() {
    assert!(is_correct(&multi(), &answer(&["B", "A"])));
    assert!(is_correct(&multi(), &answer(&["A", "B"])));
}

#[test]
fn empty_answer_key_matches_only_empty_submission() {
    let q = question(&[("A", false), ("B", false)]);
    assert!(is_correct(&q, &answer(&[])));
    assert!(!is_correct(&q, &answer(&["A"])));
}

#[test]
fn non_evaluable_questions_are_not_counted() {
    let pool = vec![
        Question {
            images: vec!["diagram.png".to_string()],
            ..Default::default()
        },
        single(),
        Question::default(),
        multi(),
    ];
    let selection = Selection::from_ids(&pool, &[0, 1, 2, 3]).unwrap();

    let mut submitted = HashMap::new();
    submitted.insert(0, answer(&["A"]));
    submitted.insert(1, answer(&["A"]));
    submitted.insert(3, answer(&["C"]));

    let result = evaluate(&selection, &submitted);

    assert_eq!(result.evaluable_count, 2);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.per_question, vec![None, Some(true), None, Some(false)]);
    assert_eq!(result.score(), 50.0);
}

#[test]
fn missing_submission_counts_as_incorrect() {
    let pool = vec![single(), multi()];
    let selection = Selection::from_ids(&pool, &[1, 0]).unwrap();

    let result = evaluate(&selection, &HashMap::new());

    assert_eq!(result.evaluable_count, 2);
    assert_eq!(result.correct_count, 0);
    assert_eq!(result.per_question, vec![Some(false), Some(false)]);
}

#[test]
fn answers_are_keyed_by_paper_position() {
    let pool = vec![multi(), single()];
    // Paper order is the reverse of bank order
    let selection = Selection::from_ids(&pool, &[1, 0]).unwrap();

    let mut submitted = HashMap::new();
    submitted.insert(0, answer(&["A"]));
    submitted.insert(1, answer(&["B", "A"]));

    let result = evaluate(&selection, &submitted);
    assert_eq!(result.correct_count, 2);
}

#[test]
fn evaluation_is_idempotent() {
    let pool = vec![single(), multi(), Question::default()];
    let selection = Selection::from_ids(&pool, &[0, 1, 2]).unwrap();

    let mut submitted = HashMap::new();
    submitted.insert(0, answer(&["B"]));
    submitted.insert(1, answer(&["A", "B"]));

    assert_eq!(evaluate(&selection, &submitted), evaluate(&selection, &submitted));
}

#[test]
fn empty_paper_scores_zero() {
    let result = evaluate(&Selection::default(), &HashMap::new());
    assert_eq!(result.evaluable_count, 0);
    assert_eq!(result.score(), 0.0);
}
