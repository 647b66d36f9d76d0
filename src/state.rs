// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{bank::QuestionBank, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub config: Config,
}

impl AppState {
    pub fn new(bank: QuestionBank, config: Config) -> Self {
        Self {
            bank: Arc::new(bank),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<QuestionBank> {
    fn from_ref(state: &AppState) -> Self {
        state.bank.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
