use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::errors::Result;

pub const MEDICAL_HISTORY_KEY: &str = "medical_history";

/// Free-text personal medical background
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub blood_group: String,
    pub allergies: String,
    pub chronic_conditions: String,
    pub surgeries: String,
    pub medications: String,
}

/// Typed medical-history access over a key-value store
pub struct MedicalHistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> MedicalHistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored history, or `None` when absent or malformed
    pub fn get_medical_history(&self) -> Option<MedicalHistory> {
        self.load_medical_history().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable medical history: {}", e);
            None
        })
    }

    /// Strict read: read failures and malformed data are errors.
    ///
    /// Use this before merging edits into the stored record.
    pub fn load_medical_history(&self) -> Result<Option<MedicalHistory>> {
        match self.store.get_item(MEDICAL_HISTORY_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_medical_history(&mut self, history: &MedicalHistory) -> Result<()> {
        let json = serde_json::to_string(history)?;
        self.store.set_item(MEDICAL_HISTORY_KEY, &json)
    }

    pub fn clear_medical_history(&mut self) -> Result<()> {
        self.store.remove_item(MEDICAL_HISTORY_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
