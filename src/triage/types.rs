//! Triage type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Self-care and monitoring
    Low,

    /// Professional consultation advised
    Medium,

    /// Emergency care advised
    High,
}

impl SeverityLevel {
    /// Lowercase label used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative mapping from a required symptom combination to an outcome.
///
/// A rule matches when every label in `symptoms` appears in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageRule {
    /// Stable identifier, used in logs and verbose output
    pub name: &'static str,

    /// Labels that must all be present
    pub symptoms: &'static [&'static str],

    pub severity: SeverityLevel,
    pub message: &'static str,
    pub recommended_action: &'static str,
}

impl TriageRule {
    /// Subset test against the reported labels (exact, case-sensitive)
    pub fn matches<S: AsRef<str>>(&self, reported: &[S]) -> bool {
        self.symptoms
            .iter()
            .all(|required| reported.iter().any(|s| s.as_ref() == *required))
    }

    /// Build the result this rule produces
    pub fn to_result(&self) -> TriageResult {
        TriageResult {
            severity: self.severity,
            message: self.message.to_string(),
            recommended_action: self.recommended_action.to_string(),
        }
    }
}

/// Input to the evaluator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: Vec<String>,
}

impl TriageRequest {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Classification produced for one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub severity: SeverityLevel,

    /// Description of the detected condition
    pub message: String,

    /// Guidance: emergency care, professional consultation or self-monitoring
    pub recommended_action: String,
}
