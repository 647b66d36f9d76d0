// src/models/paper.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{config::MAX_QUESTION_COUNT, models::question::PublicQuestion};

/// Query parameters for generating a paper.
#[derive(Debug, Deserialize, Validate)]
pub struct GeneratePaperParams {
    #[validate(range(min = 1, max = MAX_QUESTION_COUNT))]
    pub count: Option<u64>,
}

/// DTO for returning a generated paper.
#[derive(Debug, Serialize)]
pub struct PaperResponse {
    pub exam: String,
    pub questions: Vec<PublicQuestion>,
    /// Bank indices in paper order; echo them back on submit.
    pub question_ids: Vec<usize>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitPaperRequest {
    /// The `question_ids` received from the generate endpoint.
    #[validate(length(
        min = 1,
        max = MAX_QUESTION_COUNT,
        message = "Between 1 and 500 questions must be submitted"
    ))]
    pub question_ids: Vec<usize>,

    /// User's answers map.
    /// Key: position of the question within the paper (0-based)
    /// Value: letters of the checked choices
    #[serde(default)]
    pub answers: HashMap<usize, Vec<String>>,
}

/// DTO for the scored attempt.
#[derive(Debug, Serialize)]
pub struct SubmitPaperResponse {
    pub correct_count: usize,
    pub evaluable_count: usize,
    pub per_question: Vec<Option<bool>>,
    pub score: f64,
}
