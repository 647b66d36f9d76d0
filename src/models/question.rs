// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::html::{clean_html, safe_image_src};

/// A single question record as produced by the question scraper.
///
/// Every field except the text is optional in the source data; missing or
/// `null` sequences deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Label of the question in the source exam (e.g. "12").
    #[serde(default, rename = "question_number", deserialize_with = "string_or_number")]
    pub number: Option<String>,

    /// The question prompt. Missing text is tolerated and treated as empty.
    #[serde(default, rename = "question_text", deserialize_with = "null_as_default")]
    pub text: String,

    /// Images shown alongside the question.
    #[serde(default, rename = "question_image_src", deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Images shown as the reference answer.
    #[serde(default, rename = "answer_image_src", deserialize_with = "null_as_default")]
    pub answer_images: Vec<String>,

    /// Free text accompanying the reference answer images.
    #[serde(default, rename = "answer_image_text")]
    pub answer_text: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
}

/// One answer option of a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier of the choice, unique within its question (e.g. "A").
    pub letter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// The scraper emits `null` for choices that are not marked correct.
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct: bool,
}

/// Derived bucket a question falls into for sampling and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Has at least one choice, so it can be scored.
    Evaluable,
    /// No choices, but has images for reference.
    ImageOnly,
    /// Neither choices nor images.
    Other,
}

impl Question {
    pub fn category(&self) -> Category {
        if !self.choices.is_empty() {
            Category::Evaluable
        } else if !self.images.is_empty() {
            Category::ImageOnly
        } else {
            Category::Other
        }
    }

    pub fn is_evaluable(&self) -> bool {
        self.category() == Category::Evaluable
    }

    /// Number of choices flagged as correct.
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.correct).count()
    }

    /// Control the view should render for this question, if it has choices.
    pub fn input_kind(&self) -> Option<InputKind> {
        if self.choices.is_empty() {
            None
        } else if self.correct_count() > 1 {
            Some(InputKind::Checkbox)
        } else {
            Some(InputKind::Radio)
        }
    }
}

/// Form control used to collect the answer of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Radio,
    Checkbox,
}

/// DTO for sending a question to the client (excludes the `correct` flags).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    /// Index of the question in the bank; sent back on submit.
    pub id: usize,
    /// 1-based position within the generated paper.
    pub position: usize,
    pub number: Option<String>,
    pub text: String,
    pub images: Vec<String>,
    pub answer_images: Vec<String>,
    pub answer_text: Option<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_kind: Option<InputKind>,
    pub note: Option<&'static str>,
    pub choices: Vec<PublicChoice>,
}

#[derive(Debug, Serialize)]
pub struct PublicChoice {
    pub letter: String,
    pub text: String,
}

const IMAGE_ONLY_NOTE: &str = "This question contains images for reference only.";
const OTHER_NOTE: &str = "This question is not evaluable and lacks additional information.";

impl PublicQuestion {
    /// Builds the view-model for the question at `position` (0-based) of a paper.
    pub fn from_question(id: usize, position: usize, question: &Question) -> Self {
        let category = question.category();
        let note = match category {
            Category::Evaluable => None,
            Category::ImageOnly => Some(IMAGE_ONLY_NOTE),
            Category::Other => Some(OTHER_NOTE),
        };

        Self {
            id,
            position: position + 1,
            number: question.number.clone(),
            text: clean_html(&question.text),
            images: question.images.iter().filter_map(|s| safe_image_src(s)).collect(),
            answer_images: question
                .answer_images
                .iter()
                .filter_map(|s| safe_image_src(s))
                .collect(),
            answer_text: question.answer_text.as_deref().map(clean_html),
            category,
            input_kind: question.input_kind(),
            note,
            choices: question
                .choices
                .iter()
                .map(|c| PublicChoice {
                    letter: c.letter.clone(),
                    text: clean_html(&c.text),
                })
                .collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Question numbers show up both as `"12"` and `12` in scraped banks.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
