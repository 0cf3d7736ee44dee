//! Medicine and appointment reminders
//!
//! Reminders are kept as one JSON array under [`REMINDERS_KEY`]. Plain reads
//! never fail: a missing, unreadable or malformed value yields an empty list.
//! Edits read strictly and leave unreadable data untouched.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::KeyValueStore;
use crate::errors::{Result, SehatError};

pub const REMINDERS_KEY: &str = "sehat-saathi-reminders";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A single reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    /// Clock time, `HH:MM`
    pub time: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl Reminder {
    /// Create a reminder with a fresh id, validating date and time
    pub fn new(title: impl Into<String>, date: &str, time: &str) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SehatError::InvalidReminder("title must not be empty".to_string()));
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
            SehatError::InvalidReminder(format!("date '{}' is not YYYY-MM-DD: {}", date, e))
        })?;
        NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|e| {
            SehatError::InvalidReminder(format!("time '{}' is not HH:MM: {}", time, e))
        })?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            time: time.to_string(),
            date: date.to_string(),
        })
    }

    /// When the reminder fires, if its fields parse
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// Typed reminder access over a key-value store
pub struct ReminderStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReminderStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored reminders; empty on absence or malformed data
    pub fn get_reminders(&self) -> Vec<Reminder> {
        self.load_reminders().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable reminders data: {}", e);
            Vec::new()
        })
    }

    /// Strict read used before rewriting the list
    fn load_reminders(&self) -> Result<Vec<Reminder>> {
        match self.store.get_item(REMINDERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the stored list
    pub fn save_reminders(&mut self, reminders: &[Reminder]) -> Result<()> {
        let json = serde_json::to_string(reminders)?;
        self.store.set_item(REMINDERS_KEY, &json)?;
        log::debug!("saved {} reminder(s)", reminders.len());
        Ok(())
    }

    /// Validate, append and persist a new reminder
    pub fn add_reminder(&mut self, title: &str, date: &str, time: &str) -> Result<Reminder> {
        let reminder = Reminder::new(title, date, time)?;
        let mut reminders = self.load_reminders()?;
        reminders.push(reminder.clone());
        self.save_reminders(&reminders)?;
        Ok(reminder)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove_reminder(&mut self, id: &str) -> Result<bool> {
        let mut reminders = self.load_reminders()?;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Ok(false);
        }
        self.save_reminders(&reminders)?;
        Ok(true)
    }

    /// Reminders due at or after `now`, soonest first.
    ///
    /// Entries whose date or time does not parse are skipped.
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<Reminder> {
        let mut due: Vec<(NaiveDateTime, Reminder)> = self
            .get_reminders()
            .into_iter()
            .filter_map(|r| r.due_at().map(|at| (at, r)))
            .filter(|(at, _)| *at >= now)
            .collect();
        due.sort_by(|a, b| a.0.cmp(&b.0));
        due.into_iter().map(|(_, r)| r).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
