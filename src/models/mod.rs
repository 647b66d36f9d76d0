// src/models/mod.rs

pub mod paper;
pub mod question;
