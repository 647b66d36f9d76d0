// src/handlers/quiz.rs

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    bank::QuestionBank,
    config::Config,
    error::AppError,
    models::{
        paper::{GeneratePaperParams, PaperResponse, SubmitPaperRequest, SubmitPaperResponse},
        question::PublicQuestion,
    },
    quiz::{self, Selection, SubmittedAnswer},
};

/// Returns the exam name and the category counts of its question bank.
pub async fn get_exam(State(bank): State<Arc<QuestionBank>>) -> impl IntoResponse {
    Json(bank.summary())
}

/// Generates a random quiz paper.
///
/// Draws up to `count` questions (default from config): at most 10
/// image-only questions, then evaluable ones, then the rest.
/// The correct answers are not part of the response.
pub async fn generate_paper(
    State(bank): State<Arc<QuestionBank>>,
    State(config): State<Config>,
    Query(params): Query<GeneratePaperParams>,
) -> Result<impl IntoResponse, AppError> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let total = params
        .count
        .map(|c| c as usize)
        .unwrap_or(config.question_count);

    let selection = quiz::select(&bank.questions, total);

    let questions: Vec<PublicQuestion> = selection
        .iter()
        .enumerate()
        .map(|(position, entry)| PublicQuestion::from_question(entry.id, position, entry.question))
        .collect();

    tracing::info!(
        "Generated paper of {} questions for exam '{}'",
        questions.len(),
        bank.exam
    );

    Ok(Json(PaperResponse {
        exam: bank.exam.clone(),
        question_ids: selection.ids(),
        questions,
    }))
}

/// Scores a submitted paper.
///
/// * Rebuilds the paper from the echoed `question_ids`.
/// * Compares each answer with the answer key as a set of letters.
/// * Questions without choices are not scored.
pub async fn submit_paper(
    State(bank): State<Arc<QuestionBank>>,
    Json(req): Json<SubmitPaperRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let selection = Selection::from_ids(&bank.questions, &req.question_ids)?;

    let submitted: HashMap<usize, SubmittedAnswer> = req
        .answers
        .into_iter()
        .filter(|(index, _)| {
            let known = *index < selection.len();
            if !known {
                tracing::debug!("Ignoring answer for position {} outside the paper", index);
            }
            known
        })
        .map(|(index, letters)| (index, letters.into_iter().collect()))
        .collect();

    let result = quiz::evaluate(&selection, &submitted);
    let score = result.score();

    tracing::info!(
        "Scored paper for exam '{}': {}/{}",
        bank.exam,
        result.correct_count,
        result.evaluable_count
    );

    Ok(Json(SubmitPaperResponse {
        correct_count: result.correct_count,
        evaluable_count: result.evaluable_count,
        per_question: result.per_question,
        score,
    }))
}
