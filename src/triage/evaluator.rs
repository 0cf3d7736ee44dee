//! Rule evaluation and worst-case selection

use super::rules::{DEFAULT_ACTION, DEFAULT_MESSAGE, RULES};
use super::types::{SeverityLevel, TriageRequest, TriageResult, TriageRule};

/// The built-in rule table, in declaration order
pub fn rules() -> &'static [TriageRule] {
    RULES
}

/// Every rule whose required symptoms are all present, in declaration order
pub fn matching_rules<S: AsRef<str>>(symptoms: &[S]) -> Vec<&'static TriageRule> {
    RULES.iter().filter(|rule| rule.matches(symptoms)).collect()
}

/// Select the winning rule: highest severity, first declared among equals.
pub fn select_rule<S: AsRef<str>>(symptoms: &[S]) -> Option<&'static TriageRule> {
    RULES
        .iter()
        .filter(|rule| rule.matches(symptoms))
        .fold(None, |best: Option<&'static TriageRule>, rule| match best {
            Some(current) if current.severity >= rule.severity => Some(current),
            _ => Some(rule),
        })
}

/// Classify a set of reported symptoms.
///
/// Unknown labels never match a rule; an input with no match yields the
/// low-severity default.
pub fn evaluate<S: AsRef<str>>(symptoms: &[S]) -> TriageResult {
    match select_rule(symptoms) {
        Some(rule) => {
            log::debug!(
                "triage matched rule '{}' ({}) for {} symptom(s)",
                rule.name,
                rule.severity,
                symptoms.len()
            );
            rule.to_result()
        }
        None => {
            log::debug!("no triage rule matched {} symptom(s)", symptoms.len());
            default_result()
        }
    }
}

/// Request-shaped entry point
pub fn evaluate_symptoms(request: &TriageRequest) -> TriageResult {
    evaluate(request.symptoms.as_slice())
}

/// Result returned when nothing matches
pub fn default_result() -> TriageResult {
    TriageResult {
        severity: SeverityLevel::Low,
        message: DEFAULT_MESSAGE.to_string(),
        recommended_action: DEFAULT_ACTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_default() {
        let result = evaluate::<&str>(&[]);
        assert_eq!(result, default_result());
        assert!(result.recommended_action.contains("Monitor"));
    }

    #[test]
    fn test_combination_beats_single_of_same_tier() {
        let rule = select_rule(&["fatigue", "persistent fever"]).unwrap();
        assert_eq!(rule.name, "persistent-fever-fatigue");
    }

    #[test]
    fn test_first_declared_wins_among_high_rules() {
        let rule = select_rule(&["shortness of breath", "chest pain"]).unwrap();
        assert_eq!(rule.name, "cardiac-respiratory");
    }

    #[test]
    fn test_high_rule_declared_late_would_still_win() {
        // fold keeps an earlier rule only when it is at least as severe
        let rule = select_rule(&["fever", "cough", "sore throat", "shortness of breath"]).unwrap();
        assert_eq!(rule.severity, SeverityLevel::High);
    }

    #[test]
    fn test_matching_rules_in_declaration_order() {
        let names: Vec<_> = matching_rules(&["chest pain", "shortness of breath"])
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec!["cardiac-respiratory", "chest-pain", "breathing-difficulty"]
        );
    }

    #[test]
    fn test_duplicates_have_no_effect() {
        assert_eq!(
            evaluate(&["fatigue", "fatigue", "fatigue"]),
            evaluate(&["fatigue"])
        );
    }

    #[test]
    fn test_request_entry_point() {
        let request = TriageRequest::new(["chest pain"]);
        assert_eq!(evaluate_symptoms(&request).severity, SeverityLevel::High);
    }
}
