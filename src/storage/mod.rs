//! Persistence for reminders and medical history
//!
//! Both stores sit on an injected [`KeyValueStore`], so they can run against
//! [`MemoryStore`] in tests and [`FileStore`] from the command line.

pub mod file;
pub mod medical_history;
pub mod memory;
pub mod reminders;

pub use file::FileStore;
pub use medical_history::{MedicalHistory, MedicalHistoryStore, MEDICAL_HISTORY_KEY};
pub use memory::MemoryStore;
pub use reminders::{Reminder, ReminderStore, REMINDERS_KEY};

use crate::errors::Result;

/// String key-value storage capability.
///
/// Removing a key that does not exist is not an error.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
