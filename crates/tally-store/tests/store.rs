// File: crates/tally-store/tests/store.rs
// Purpose: Insert/list/delete round-trips against both store backends.

use tally_core::{Domain, Entry, EntryForm, Uuid};
use tally_store::{EntryStore, MemoryStore, SqliteStore, StoreError};

fn backends() -> Vec<(&'static str, Box<dyn EntryStore>)> {
    vec![
        ("memory", Box::new(MemoryStore::new())),
        ("sqlite", Box::new(SqliteStore::open_in_memory(Domain::FINANCE).expect("open sqlite"))),
    ]
}

fn sample(label: &str, date: Option<&str>) -> Entry {
    Entry::new("groceries", 42.5, label, date.map(str::to_string))
}

#[test]
fn insert_then_list_returns_entry_once() {
    for (name, store) in backends() {
        let e = sample("food", Some("2024-01-05"));
        store.insert(&e).unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all.iter().filter(|x| x.id == e.id).count(), 1, "{name}");
        assert_eq!(all[0], e, "{name}: fields should round-trip");
    }
}

#[test]
fn delete_removes_entry() {
    for (name, store) in backends() {
        let keep = sample("rent", Some("2024-02-01"));
        let gone = sample("food", None);
        store.insert(&keep).unwrap();
        store.insert(&gone).unwrap();

        assert!(store.delete_by_id(gone.id).unwrap(), "{name}");
        let all = store.list_all().unwrap();
        assert!(all.iter().all(|x| x.id != gone.id), "{name}");
        assert_eq!(all.len(), 1, "{name}");

        // unknown ids are not an error
        assert!(!store.delete_by_id(Uuid::new_v4()).unwrap(), "{name}");
    }
}

#[test]
fn list_keeps_insertion_order() {
    for (name, store) in backends() {
        let labels = ["rent", "food", "bills", "food"];
        for l in labels {
            store.insert(&sample(l, Some("2024-03-03"))).unwrap();
        }
        let got: Vec<String> = store.list_all().unwrap().into_iter().map(|e| e.label).collect();
        assert_eq!(got, labels, "{name}");
        assert_eq!(store.count().unwrap(), 4, "{name}");
    }
}

#[test]
fn duplicate_id_is_rejected() {
    for (name, store) in backends() {
        let e = sample("food", None);
        store.insert(&e).unwrap();
        assert!(matches!(store.insert(&e), Err(StoreError::DuplicateId(id)) if id == e.id), "{name}");
        assert_eq!(store.count().unwrap(), 1, "{name}");
    }
}

#[test]
fn skipped_submission_leaves_store_unchanged() {
    for (name, store) in backends() {
        let form = EntryForm { name: "rent".into(), value: String::new(), label: "housing".into(), date: "2024-01-01".into() };
        if let Some(entry) = form.into_entry() {
            store.insert(&entry).unwrap();
        }
        assert_eq!(store.count().unwrap(), 0, "{name}");
    }
}

#[test]
fn sqlite_file_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");
    let e = Entry::new("squat", 12.0, "legs", Some("2024-05-17".into()));
    {
        let store = SqliteStore::open(&path, Domain::FITNESS).unwrap();
        store.insert(&e).unwrap();
    }
    let store = SqliteStore::open(&path, Domain::FITNESS).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![e]);

    // the other domain lives in its own table
    let finance = SqliteStore::open(&path, Domain::FINANCE).unwrap();
    assert!(finance.list_all().unwrap().is_empty());
}
