// src/config.rs

use std::{env, path::PathBuf};
use dotenvy::dotenv;

/// Default number of questions in a generated paper.
pub const DEFAULT_QUESTION_COUNT: usize = 50;

/// Upper bound a client may request for a single paper.
pub const MAX_QUESTION_COUNT: u64 = 500;

/// Maximum number of image-only questions drawn into a paper.
pub const IMAGE_ONLY_CAP: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `input/user_requirement.json` and the `<exam>_output_questions` folders.
    pub data_dir: PathBuf,
    /// Overrides the exam named in `user_requirement.json`.
    pub exam_name: Option<String>,
    pub question_count: usize,
    pub bind_addr: String,
    /// Optional directory with the browser front-end.
    pub static_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let exam_name = env::var("EXAM_NAME").ok().filter(|s| !s.trim().is_empty());

        let question_count = env::var("QUESTION_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUESTION_COUNT);

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let static_dir = env::var("STATIC_DIR").ok().map(PathBuf::from);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            exam_name,
            question_count,
            bind_addr,
            static_dir,
            cors_origins,
            rust_log,
        }
    }
}
