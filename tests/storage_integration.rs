//! Integration tests for the file-backed reminder and medical-history stores

use sehat_saathi::storage::{
    FileStore, KeyValueStore, MedicalHistory, MedicalHistoryStore, Reminder, ReminderStore,
    MEDICAL_HISTORY_KEY, REMINDERS_KEY,
};
use tempfile::TempDir;

fn history() -> MedicalHistory {
    MedicalHistory {
        blood_group: "O+".to_string(),
        allergies: "Peanuts".to_string(),
        chronic_conditions: "None".to_string(),
        surgeries: "None".to_string(),
        medications: "Vitamin D".to_string(),
    }
}

#[test]
fn test_reminders_survive_reopening_the_store() {
    let temp = TempDir::new().unwrap();

    let added = {
        let mut store = ReminderStore::new(FileStore::new(temp.path()).unwrap());
        store.add_reminder("Take medicine", "2026-01-15", "09:00").unwrap()
    };

    let store = ReminderStore::new(FileStore::new(temp.path()).unwrap());
    assert_eq!(store.get_reminders(), vec![added]);
}

#[test]
fn test_corrupted_reminder_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let mut kv = FileStore::new(temp.path()).unwrap();
    kv.set_item(REMINDERS_KEY, "invalid json").unwrap();

    let mut store = ReminderStore::new(kv);
    assert!(store.get_reminders().is_empty());

    // Saving over the corrupted value recovers the store
    let reminder = Reminder::new("Eye drops", "2026-02-01", "21:30").unwrap();
    store.save_reminders(&[reminder.clone()]).unwrap();
    assert_eq!(store.get_reminders(), vec![reminder]);
}

#[test]
fn test_medical_history_lifecycle() {
    let temp = TempDir::new().unwrap();
    let mut store = MedicalHistoryStore::new(FileStore::new(temp.path()).unwrap());

    assert!(store.get_medical_history().is_none());

    store.save_medical_history(&history()).unwrap();
    assert!(temp.path().join("medical_history.json").exists());
    assert_eq!(store.get_medical_history(), Some(history()));

    store.clear_medical_history().unwrap();
    assert!(store.get_medical_history().is_none());
    assert!(store.store().get_item(MEDICAL_HISTORY_KEY).unwrap().is_none());
}

#[test]
fn test_stores_share_one_backend_without_clobbering() {
    let temp = TempDir::new().unwrap();
    let mut kv = FileStore::new(temp.path()).unwrap();

    MedicalHistoryStore::new(&mut kv)
        .save_medical_history(&history())
        .unwrap();
    ReminderStore::new(&mut kv)
        .add_reminder("Refill prescription", "2026-03-10", "10:00")
        .unwrap();

    assert_eq!(MedicalHistoryStore::new(&mut kv).get_medical_history(), Some(history()));
    assert_eq!(ReminderStore::new(&mut kv).get_reminders().len(), 1);
}

#[test]
fn test_unreadable_reminders_file_is_left_intact() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(format!("{}.json", REMINDERS_KEY));
    let mut bytes =
        br#"[{"id":"1","title":"Take medicine","time":"09:00","date":"2026-01-15"}]"#.to_vec();
    bytes.push(0xff);
    std::fs::write(&path, &bytes).unwrap();

    let mut store = ReminderStore::new(FileStore::new(temp.path()).unwrap());
    assert!(store.get_reminders().is_empty());
    assert!(store.add_reminder("Eye drops", "2026-02-01", "21:30").is_err());
    assert!(store.remove_reminder("1").is_err());

    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_history_strict_load_keeps_malformed_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(format!("{}.json", MEDICAL_HISTORY_KEY));
    std::fs::write(&path, "{\"bloodGroup\":").unwrap();

    let store = MedicalHistoryStore::new(FileStore::new(temp.path()).unwrap());
    assert!(store.get_medical_history().is_none());
    assert!(store.load_medical_history().is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"bloodGroup\":");
}
