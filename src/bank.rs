// src/bank.rs

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError, models::question::Question, quiz::partition};

/// Exam used when `user_requirement.json` names none.
pub const DEFAULT_EXAM: &str = "default_exam";

const REQUIREMENT_DIR: &str = "input";
const REQUIREMENT_FILE: &str = "user_requirement.json";
const BANK_FILE: &str = "questions_answer.json";

static EXAM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid exam name regex"));

/// All questions available for one exam.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pub exam: String,
    pub questions: Vec<Question>,
}

/// Category counts of a question bank, as shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankSummary {
    pub exam: String,
    pub total: usize,
    pub evaluable: usize,
    pub image_only: usize,
    pub other: usize,
}

impl QuestionBank {
    pub fn new(exam: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            exam: exam.into(),
            questions,
        }
    }

    pub fn summary(&self) -> BankSummary {
        let parts = partition(&self.questions);
        BankSummary {
            exam: self.exam.clone(),
            total: parts.total(),
            evaluable: parts.evaluable.len(),
            image_only: parts.image_only.len(),
            other: parts.other.len(),
        }
    }
}

/// Where question banks come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load(&self) -> Result<QuestionBank, AppError>;
}

/// Contents of `user_requirement.json`.
#[derive(Debug, Deserialize)]
struct UserRequirement {
    exam: Option<String>,
}

/// Rejects names that could escape the data directory.
pub fn validate_exam_name(name: &str) -> Result<(), AppError> {
    if name.contains("..") || !EXAM_NAME_RE.is_match(name) {
        return Err(AppError::BadRequest(format!("Invalid exam name '{}'", name)));
    }
    Ok(())
}

/// Loads banks laid out as `<data_dir>/<exam>_output_questions/questions_answer.json`.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    data_dir: PathBuf,
    exam: Option<String>,
}

impl FileQuestionSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            exam: None,
        }
    }

    /// Uses `exam` instead of the one in `user_requirement.json`.
    pub fn with_exam(mut self, exam: Option<String>) -> Self {
        self.exam = exam;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir).with_exam(config.exam_name.clone())
    }

    pub fn bank_path(&self, exam: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}_output_questions", exam))
            .join(BANK_FILE)
    }

    pub fn requirement_path(&self) -> PathBuf {
        self.data_dir.join(REQUIREMENT_DIR).join(REQUIREMENT_FILE)
    }

    /// Resolves the exam name: explicit override, then `input/user_requirement.json`.
    ///
    /// The requirement file must exist unless an override is given; only a
    /// missing `exam` key falls back to `DEFAULT_EXAM`.
    pub async fn exam_name(&self) -> Result<String, AppError> {
        if let Some(exam) = &self.exam {
            return Ok(exam.clone());
        }

        let path = self.requirement_path();
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("Requirement file {} not found", path.display()))
            } else {
                tracing::error!("Failed to read {}: {:?}", path.display(), e);
                AppError::from(e)
            }
        })?;

        let requirement: UserRequirement = serde_json::from_str(&raw)?;
        Ok(requirement
            .exam
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXAM.to_string()))
    }
}

async fn read_bank(path: &Path) -> Result<Vec<Question>, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(format!("Question bank {} not found", path.display()))
        } else {
            tracing::error!("Failed to read {}: {:?}", path.display(), e);
            AppError::from(e)
        }
    })?;

    Ok(serde_json::from_str(&raw)?)
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self) -> Result<QuestionBank, AppError> {
        let exam = self.exam_name().await?;
        validate_exam_name(&exam)?;

        let path = self.bank_path(&exam);
        let questions = read_bank(&path).await?;
        tracing::info!("Loaded {} questions for exam '{}'", questions.len(), exam);

        Ok(QuestionBank::new(exam, questions))
    }
}

/// A bank held in memory, for tests and embedding.
#[derive(Debug, Clone)]
pub struct StaticQuestionSource(pub QuestionBank);

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn load(&self) -> Result<QuestionBank, AppError> {
        Ok(self.0.clone())
    }
}
