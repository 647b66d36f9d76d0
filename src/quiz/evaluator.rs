// src/quiz/evaluator.rs

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::Selection;
use crate::models::question::Question;

/// Letters the user checked for one question.
pub type SubmittedAnswer = HashSet<String>;

/// Outcome of scoring one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub correct_count: usize,
    pub evaluable_count: usize,
    /// One entry per question of the paper, in paper order.
    /// `None` marks a question without choices, which is never scored.
    pub per_question: Vec<Option<bool>>,
}

impl EvaluationResult {
    /// Percentage of evaluable questions answered correctly.
    pub fn score(&self) -> f64 {
        if self.evaluable_count == 0 {
            return 0.0;
        }
        (self.correct_count as f64 / self.evaluable_count as f64) * 100.0
    }
}

/// Whether `selected` is exactly the set of correct letters of `question`.
pub fn is_correct(question: &Question, selected: &SubmittedAnswer) -> bool {
    let correct: HashSet<&str> = question
        .choices
        .iter()
        .filter(|c| c.correct)
        .map(|c| c.letter.as_str())
        .collect();

    correct.len() == selected.len() && selected.iter().all(|l| correct.contains(l.as_str()))
}

/// Scores a paper.
///
/// `submitted` is keyed by position within the paper. A missing entry counts
/// as an empty answer.
pub fn evaluate(
    selection: &Selection<'_>,
    submitted: &HashMap<usize, SubmittedAnswer>,
) -> EvaluationResult {
    let empty = SubmittedAnswer::new();
    let mut correct_count = 0;
    let mut evaluable_count = 0;

    let per_question = selection
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.question.is_evaluable() {
                return None;
            }

            evaluable_count += 1;
            let selected = submitted.get(&index).unwrap_or(&empty);
            let correct = is_correct(entry.question, selected);
            if correct {
                correct_count += 1;
            }
            Some(correct)
        })
        .collect();

    EvaluationResult {
        correct_count,
        evaluable_count,
        per_question,
    }
}
