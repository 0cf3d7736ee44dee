//! Symptom vocabulary and caller-side normalization
//!
//! The evaluator compares labels exactly. Anything that should match despite
//! casing or separator differences has to go through [`normalize_symptom`]
//! first.

use super::rules::RULES;
use std::collections::BTreeSet;

/// Sorted, de-duplicated labels referenced by the rule table
pub fn known_symptoms() -> Vec<&'static str> {
    RULES
        .iter()
        .flat_map(|rule| rule.symptoms.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn is_known(label: &str) -> bool {
    RULES.iter().any(|rule| rule.symptoms.contains(&label))
}

/// Lowercase, map `_` and `-` to spaces, collapse whitespace.
pub fn normalize_symptom(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize every label and drop the ones that end up empty
pub fn normalize_all<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| normalize_symptom(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symptoms_sorted_and_unique() {
        let known = known_symptoms();
        let mut sorted = known.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(known, sorted);
        assert!(known.contains(&"chest pain"));
        assert!(known.contains(&"sore throat"));
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("fatigue"));
        assert!(!is_known("Fatigue"));
        assert!(!is_known("runny nose"));
    }

    #[test]
    fn test_normalize_symptom() {
        assert_eq!(normalize_symptom("  Chest   Pain "), "chest pain");
        assert_eq!(normalize_symptom("SHORTNESS_OF_BREATH"), "shortness of breath");
        assert_eq!(normalize_symptom("sore-throat"), "sore throat");
    }

    #[test]
    fn test_normalize_all_drops_blank_labels() {
        let labels = normalize_all(["Fever", "   ", "", "Cough"]);
        assert_eq!(labels, vec!["fever".to_string(), "cough".to_string()]);
    }
}
