//! Symptom triage
//!
//! Maps reported symptom labels to a severity tier, a message and a
//! recommended action using a fixed rule table. When several rules match,
//! the most severe one wins.

pub mod evaluator;
pub mod rules;
pub mod types;
pub mod vocabulary;

pub use evaluator::{
    default_result, evaluate, evaluate_symptoms, matching_rules, rules, select_rule,
};
pub use types::{SeverityLevel, TriageRequest, TriageResult, TriageRule};
pub use vocabulary::{is_known, known_symptoms, normalize_all, normalize_symptom};
