//! Built-in triage rule table
//!
//! Order matters only between rules of the same severity: the first declared
//! match wins. Combination rules are therefore listed before the
//! single-symptom rules they contain.

use super::types::{SeverityLevel, TriageRule};

pub const CHEST_PAIN: &str = "chest pain";
pub const SHORTNESS_OF_BREATH: &str = "shortness of breath";
pub const FATIGUE: &str = "fatigue";
pub const PERSISTENT_FEVER: &str = "persistent fever";
pub const FEVER: &str = "fever";
pub const COUGH: &str = "cough";
pub const SORE_THROAT: &str = "sore throat";

/// Message returned when no rule matches
pub const DEFAULT_MESSAGE: &str = "No serious symptoms detected.";

/// Action returned when no rule matches
pub const DEFAULT_ACTION: &str = "Monitor your symptoms and consult a doctor if they worsen.";

pub static RULES: &[TriageRule] = &[
    TriageRule {
        name: "cardiac-respiratory",
        symptoms: &[CHEST_PAIN, SHORTNESS_OF_BREATH],
        severity: SeverityLevel::High,
        message: "Chest pain together with shortness of breath can signal a heart or lung emergency.",
        recommended_action: "Go to the nearest emergency department or call your local emergency number now.",
    },
    TriageRule {
        name: "chest-pain",
        symptoms: &[CHEST_PAIN],
        severity: SeverityLevel::High,
        message: "Chest pain may indicate a serious medical condition.",
        recommended_action: "Seek emergency care or contact a doctor immediately.",
    },
    TriageRule {
        name: "breathing-difficulty",
        symptoms: &[SHORTNESS_OF_BREATH],
        severity: SeverityLevel::High,
        message: "Breathing difficulty needs prompt medical attention.",
        recommended_action: "Seek emergency care, especially if breathing gets worse or does not settle with rest.",
    },
    TriageRule {
        name: "persistent-fever-fatigue",
        symptoms: &[PERSISTENT_FEVER, FATIGUE],
        severity: SeverityLevel::Medium,
        message: "A persistent fever with fatigue may point to an infection that should be examined.",
        recommended_action: "Consult a healthcare professional within the next 24 hours.",
    },
    TriageRule {
        name: "fatigue",
        symptoms: &[FATIGUE],
        severity: SeverityLevel::Medium,
        message: "Ongoing fatigue can have many underlying causes.",
        recommended_action: "Consult a healthcare professional if the fatigue lasts more than a few days.",
    },
    TriageRule {
        name: "flu-like",
        symptoms: &[FEVER, COUGH, SORE_THROAT],
        severity: SeverityLevel::Low,
        message: "Your symptoms look like a mild flu-like illness.",
        recommended_action: "Rest, drink plenty of fluids and monitor your symptoms. See a doctor if they worsen.",
    },
];
