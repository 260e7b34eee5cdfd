//! UserStateOrchestrator: per-user isolation, commit-on-save, serialization.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use slc_core::errors::{SlcError, SlcResult, StoreError};
use slc_core::models::{Area, Class, UserRecord, Variant};
use slc_core::traits::IStateStore;
use slc_engine::{ClassifierService, SharedClassifier, UserStateOrchestrator};
use slc_storage::StateStoreEngine;
use tempfile::TempDir;

/// HashMap-backed store that counts calls and can be told to fail saves.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<HashMap<String, UserRecord>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl IStateStore for MemoryStore {
    fn load(&self, user_id: &str) -> SlcResult<Option<UserRecord>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().get(user_id).cloned())
    }

    fn save(&self, record: &UserRecord) -> SlcResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Sqlite {
                message: "disk full".into(),
            }
            .into());
        }
        self.rows
            .lock()
            .unwrap()
            .insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    fn delete(&self, user_id: &str) -> SlcResult<()> {
        self.rows.lock().unwrap().remove(user_id);
        Ok(())
    }
}

fn props(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn init_cat_dog(svc: &dyn ClassifierService, user_id: &str) {
    svc.init(
        user_id,
        Class::new("Cat", ["whiskers", "purr", "whiskers"]),
        Class::new("Dog", ["bark", "tail", "whiskers"]),
    )
    .unwrap();
}

#[test]
fn unknown_user_starts_uninitialized() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store);
    assert!(svc.snapshot("new-user").unwrap().is_uninitialized());
}

#[test]
fn every_operation_is_one_load_and_one_save() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store.clone());

    init_cat_dog(&svc, "u1");
    let _ = svc.classify("u1", &props(&["purr"])).unwrap();
    let _ = svc.snapshot("u1").unwrap();

    assert_eq!(store.loads.load(Ordering::SeqCst), 3);
    assert_eq!(store.saves.load(Ordering::SeqCst), 3);
}

#[test]
fn users_do_not_see_each_other() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store);

    init_cat_dog(&svc, "alice");
    svc.feedback("alice", Variant::None, &props(&["gills"])).unwrap();

    assert!(svc.snapshot("bob").unwrap().is_uninitialized());
    assert_eq!(svc.snapshot("alice").unwrap().none_class, vec!["gills"]);
}

#[test]
fn failed_save_is_not_committed() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store.clone());
    init_cat_dog(&svc, "u1");

    store.fail_saves.store(true, Ordering::SeqCst);
    let err = svc
        .feedback("u1", Variant::Class1, &props(&["meow"]))
        .unwrap_err();
    assert!(matches!(err, SlcError::Store(StoreError::Sqlite { .. })));

    store.fail_saves.store(false, Ordering::SeqCst);
    let snap = svc.snapshot("u1").unwrap();
    assert_eq!(snap.class1.properties, vec!["purr"]);
}

#[test]
fn validation_error_skips_save() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store.clone());
    init_cat_dog(&svc, "u1");
    let saves = store.saves.load(Ordering::SeqCst);

    let err = svc.add_property("u1", Area::All, "x").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.saves.load(Ordering::SeqCst), saves);
}

#[test]
fn reset_deletes_the_record() {
    let store = Arc::new(MemoryStore::default());
    let svc = UserStateOrchestrator::new(store.clone());
    init_cat_dog(&svc, "u1");

    svc.reset("u1").unwrap();
    assert!(store.rows.lock().unwrap().get("u1").is_none());
    assert!(svc.snapshot("u1").unwrap().is_uninitialized());
}

#[test]
fn concurrent_feedback_for_one_user_loses_nothing() {
    let store = Arc::new(MemoryStore::default());
    let svc = Arc::new(UserStateOrchestrator::new(store));
    init_cat_dog(svc.as_ref(), "u1");

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                svc.feedback("u1", Variant::None, &[format!("n{i}")]).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(svc.snapshot("u1").unwrap().none_class.len(), 16);
    assert_eq!(svc.active_users(), 0);
}

#[test]
fn sqlite_roundtrip_in_memory() {
    let store = Arc::new(StateStoreEngine::open_in_memory().unwrap());
    let svc = UserStateOrchestrator::new(store);

    init_cat_dog(&svc, "u1");
    let outcome = svc.classify("u1", &props(&["purr"])).unwrap();
    assert_eq!(outcome.guess, "Cat");
    assert_eq!(outcome.known_hits, vec!["purr"]);

    svc.feedback("u1", Variant::None, &props(&["purr", "new_unknown"]))
        .unwrap();
    assert_eq!(svc.snapshot("u1").unwrap().none_class, vec!["new_unknown"]);
}

#[test]
fn sqlite_state_survives_a_new_orchestrator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slc.db");

    let before = {
        let store = Arc::new(StateStoreEngine::open(&path).unwrap());
        let svc = UserStateOrchestrator::new(store);
        init_cat_dog(&svc, "u1");
        svc.feedback("u1", Variant::Class2, &props(&["tail", "fur"]))
            .unwrap();
        svc.snapshot("u1").unwrap()
    };

    let store = Arc::new(StateStoreEngine::open(&path).unwrap());
    let svc = UserStateOrchestrator::new(store);
    assert_eq!(svc.snapshot("u1").unwrap(), before);
    assert_eq!(before.class2.properties, vec!["bark", "tail", "fur"]);
}

#[test]
fn edits_before_init_persist_like_the_shared_service() {
    let shared = SharedClassifier::new();
    let svc = UserStateOrchestrator::new(Arc::new(MemoryStore::default()));

    let services: [&dyn ClassifierService; 2] = [&shared, &svc];
    for s in services {
        s.feedback("u1", Variant::Class1, &props(&["fur"])).unwrap();
        s.add_property("u1", Area::None, "gills").unwrap();
    }

    let snap = svc.snapshot("u1").unwrap();
    assert!(snap.is_uninitialized());
    assert_eq!(snap.class1.properties, vec!["fur"]);
    assert_eq!(snap.none_class, vec!["gills"]);
    assert_eq!(snap, shared.snapshot("u1").unwrap());
}
