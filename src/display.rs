//! Terminal rendering for triage results and stored records
//!
//! Colour is applied with `colored`; the binary switches it off globally when
//! the configuration asks for plain output.

use colored::*;

use crate::storage::{MedicalHistory, Reminder};
use crate::triage::{SeverityLevel, TriageResult, TriageRule};

fn severity_badge(severity: SeverityLevel) -> ColoredString {
    let label = format!(" {} ", severity.as_str().to_uppercase());
    match severity {
        SeverityLevel::High => label.white().on_red().bold(),
        SeverityLevel::Medium => label.black().on_yellow().bold(),
        SeverityLevel::Low => label.black().on_green(),
    }
}

/// Severity banner followed by the message and recommended action
pub fn render_result(result: &TriageResult) -> String {
    let action = match result.severity {
        SeverityLevel::High => result.recommended_action.red().bold(),
        SeverityLevel::Medium => result.recommended_action.yellow(),
        SeverityLevel::Low => result.recommended_action.normal(),
    };
    format!(
        "{} {}\n  {} {}",
        severity_badge(result.severity),
        result.message,
        "→".dimmed(),
        action
    )
}

/// One line per matching rule
pub fn render_rules(rules: &[&TriageRule]) -> String {
    if rules.is_empty() {
        return format!("{}", "No rules matched".dimmed());
    }
    rules
        .iter()
        .map(|rule| {
            format!(
                "  {} {:<26} [{}]",
                "•".cyan(),
                rule.name,
                rule.symptoms.join(" + ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_reminders(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return format!("{}", "No reminders".dimmed());
    }
    reminders
        .iter()
        .map(|r| format!("{} {}  {}  {}", r.date, r.time.bold(), r.title, r.id.dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history(history: &MedicalHistory) -> String {
    let rows = [
        ("Blood group", &history.blood_group),
        ("Allergies", &history.allergies),
        ("Chronic conditions", &history.chronic_conditions),
        ("Surgeries", &history.surgeries),
        ("Medications", &history.medications),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<20} {}", label.bold(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::evaluate;

    #[test]
    fn test_render_result_contains_text() {
        let result = evaluate(&["chest pain"]);
        let rendered = render_result(&result);
        assert!(rendered.contains("HIGH"));
        assert!(rendered.contains(&result.message));
        assert!(rendered.contains(&result.recommended_action));
    }

    #[test]
    fn test_render_rules_lists_names() {
        let rules = crate::triage::matching_rules(&["persistent fever", "fatigue"]);
        let rendered = render_rules(&rules);
        assert!(rendered.contains("persistent-fever-fatigue"));
        assert!(rendered.contains("persistent fever + fatigue"));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_render_empty_collections() {
        assert!(render_rules(&[]).contains("No rules matched"));
        assert!(render_reminders(&[]).contains("No reminders"));
    }

    #[test]
    fn test_render_history_rows() {
        let history = MedicalHistory {
            blood_group: "O+".to_string(),
            ..Default::default()
        };
        let rendered = render_history(&history);
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("O+"));
    }
}
