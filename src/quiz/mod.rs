// src/quiz/mod.rs

//! Question selection and scoring.
//!
//! The sampler draws a bounded, category-mixed paper from the question bank
//! and the evaluator scores submitted answers against the embedded key. Both
//! are synchronous and pure apart from the sampler's random source.

pub mod evaluator;
pub mod sampler;

use std::{collections::HashSet, fmt};

use crate::models::question::Question;

pub use evaluator::{EvaluationResult, SubmittedAnswer, evaluate};
pub use sampler::{Partition, partition, select, select_with_rng};

/// A question drawn into a paper, together with its index in the pool.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub id: usize,
    pub question: &'a Question,
}

/// Ordered questions of one quiz paper. Holds no duplicates.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    entries: Vec<Entry<'a>>,
}

/// Reasons a client-supplied list of question ids cannot form a paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownQuestion(usize),
    Duplicate(usize),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownQuestion(id) => write!(f, "Unknown question id {}", id),
            SelectionError::Duplicate(id) => write!(f, "Question id {} appears more than once", id),
        }
    }
}

impl std::error::Error for SelectionError {}

impl<'a> Selection<'a> {
    pub(crate) fn from_entries(entries: Vec<Entry<'a>>) -> Self {
        Self { entries }
    }

    /// Rebuilds a paper from pool indices, keeping their order.
    pub fn from_ids(pool: &'a [Question], ids: &[usize]) -> Result<Self, SelectionError> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut entries = Vec::with_capacity(ids.len());

        for &id in ids {
            let question = pool.get(id).ok_or(SelectionError::UnknownQuestion(id))?;
            if !seen.insert(id) {
                return Err(SelectionError::Duplicate(id));
            }
            entries.push(Entry { id, question });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<'a>> {
        self.entries.iter()
    }

    /// Pool indices in paper order.
    pub fn ids(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.id).collect()
    }
}
