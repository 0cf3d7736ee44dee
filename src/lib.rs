//! Sehat Saathi - symptom triage and personal health records
//!
//! # Architecture
//!
//! - **triage**: rule-table evaluator mapping symptom labels to a severity tier
//! - **storage**: key-value capability plus reminder and medical-history stores
//! - **cli** / **display**: command-line front end and terminal rendering

pub mod errors;
pub mod triage;
pub mod storage;

// Re-export commonly used types
pub use errors::{Result, SehatError};
pub use triage::{evaluate, evaluate_symptoms, SeverityLevel, TriageRequest, TriageResult};

// Command-line front end
pub mod cli;
pub mod display;
