//! ClassState: init, classify, feedback, snapshot, and single-property edits.

use slc_core::errors::ValidationError;
use slc_core::models::{Area, Class, Slot, Variant};
use slc_engine::set_algebra::intersection;
use slc_engine::ClassState;

fn cat_dog() -> ClassState {
    let mut state = ClassState::new();
    state.init(
        Class::new("Cat", ["whiskers", "purr", "whiskers"]),
        Class::new("Dog", ["bark", "tail", "whiskers"]),
    );
    state
}

fn assert_exclusive(state: &ClassState) {
    let shared = intersection(&state.class1().properties, &state.class2().properties);
    assert!(shared.is_empty(), "classes share {shared:?}");
}

// ---- init ----

#[test]
fn init_moves_shared_properties_to_general() {
    let state = cat_dog();
    let snap = state.snapshot();
    assert_eq!(snap.class1.properties, vec!["purr"]);
    assert_eq!(snap.class2.properties, vec!["bark", "tail"]);
    assert_eq!(snap.general_class, vec!["whiskers"]);
    assert!(snap.none_class.is_empty());
    assert_exclusive(&state);
}

#[test]
fn reinit_replaces_classes_and_keeps_general() {
    let mut state = cat_dog();
    state.init(
        Class::new("Fish", ["fins", "scales"]),
        Class::new("Bird", ["wings", "scales"]),
    );
    let snap = state.snapshot();
    assert_eq!(snap.class1.name, "Fish");
    assert_eq!(snap.class2.name, "Bird");
    assert_eq!(snap.general_class, vec!["scales", "whiskers"]);
    assert_exclusive(&state);
}

#[test]
fn init_trims_class_names() {
    let mut state = ClassState::new();
    state.init(Class::new(" Cat ", ["purr"]), Class::new("\tDog", ["bark"]));
    assert_eq!(state.class1().name, "Cat");
    assert_eq!(state.class2().name, "Dog");
    assert_eq!(state.classify(&["purr"]).guess, "Cat");
}

#[test]
fn fresh_state_is_uninitialized() {
    let state = ClassState::new();
    assert!(!state.is_initialized());
    assert!(state.snapshot().is_uninitialized());
    assert!(cat_dog().is_initialized());
}

// ---- classify ----

#[test]
fn classify_picks_class_with_more_hits() {
    let state = cat_dog();
    let outcome = state.classify(&["purr"]);
    assert_eq!(outcome.guess, "Cat");
    assert_eq!(outcome.known_hits, vec!["purr"]);
    assert!(outcome.unknown.is_empty());
    assert!(outcome.is_decisive());
}

#[test]
fn classify_reports_unknown_sorted() {
    let state = cat_dog();
    let outcome = state.classify(&["zeta", "whiskers", "alpha"]);
    assert_eq!(outcome.guess, "");
    assert_eq!(outcome.unknown, vec!["alpha", "zeta"]);
    assert!(outcome.recommendation.contains("\"Cat\""));
    assert!(outcome.recommendation.contains("\"Dog\""));
}

#[test]
fn classify_does_not_mutate() {
    let state = cat_dog();
    let before = state.clone();
    let _ = state.classify(&["purr", "new"]);
    assert_eq!(state, before);
}

#[test]
fn classify_tie_sorts_hits() {
    let mut state = ClassState::new();
    state.init(
        Class::new("Cat", ["whiskers", "purr"]),
        Class::new("Dog", ["bark", "tail"]),
    );
    let outcome = state.classify(&["whiskers", "tail"]);
    assert_eq!(outcome.guess, "");
    assert_eq!(outcome.known_hits, vec!["tail", "whiskers"]);
}

// ---- feedback ----

#[test]
fn none_feedback_ignores_known_properties() {
    let mut state = cat_dog();
    state.feedback(Variant::None, &["purr", "new_unknown"]);
    assert_eq!(state.snapshot().none_class, vec!["new_unknown"]);
}

#[test]
fn none_feedback_ignores_general_properties() {
    let mut state = cat_dog();
    state.feedback(Variant::None, &["whiskers"]);
    assert!(state.none().is_empty());
}

#[test]
fn none_feedback_twice_is_idempotent() {
    let mut state = cat_dog();
    state.feedback(Variant::None, &["gills"]);
    let once = state.snapshot();
    state.feedback(Variant::None, &["gills"]);
    assert_eq!(state.snapshot(), once);
}

#[test]
fn class_feedback_unions_without_touching_general() {
    let mut state = cat_dog();
    state.feedback(Variant::Class2, &["tail", "fur"]);
    let snap = state.snapshot();
    assert_eq!(snap.class2.properties, vec!["bark", "tail", "fur"]);
    assert_eq!(snap.general_class, vec!["whiskers"]);
}

#[test]
fn feedback_creating_overlap_promotes_to_general() {
    let mut state = cat_dog();
    state.feedback(Variant::Class1, &["tail"]);
    let snap = state.snapshot();
    assert!(!snap.class1.properties.contains(&"tail".to_string()));
    assert!(!snap.class2.properties.contains(&"tail".to_string()));
    assert_eq!(snap.general_class, vec!["tail", "whiskers"]);
    assert_exclusive(&state);
}

#[test]
fn snapshot_sorts_general_and_none_only() {
    let mut state = ClassState::new();
    state.init(
        Class::new("A", ["z", "y", "m"]),
        Class::new("B", ["m", "b"]),
    );
    state.feedback(Variant::None, &["q", "c"]);
    let snap = state.snapshot();
    assert_eq!(snap.class1.properties, vec!["z", "y"]);
    assert_eq!(snap.none_class, vec!["c", "q"]);
}

// ---- single-property edits ----

#[test]
fn add_property_is_idempotent() {
    let mut state = cat_dog();
    state.add_property(Area::None, "gills").unwrap();
    state.add_property(Area::None, " gills ").unwrap();
    assert_eq!(state.none(), ["gills".to_string()]);
}

#[test]
fn add_property_rejects_all() {
    let mut state = cat_dog();
    let before = state.clone();
    let err = state.add_property(Area::All, "gills").unwrap_err();
    assert!(matches!(err, ValidationError::AreaNotAllowed { operation: "add", .. }));
    assert_eq!(state, before);
}

#[test]
fn add_property_to_both_classes_restores_exclusivity() {
    let mut state = cat_dog();
    state.add_property(Area::Class2, "purr").unwrap();
    assert!(state.general().contains(&"purr".to_string()));
    assert_exclusive(&state);
}

#[test]
fn remove_property_from_one_area() {
    let mut state = cat_dog();
    state.remove_property(Area::Class2, "bark");
    state.remove_property(Area::Class2, "bark");
    assert_eq!(state.class2().properties, vec!["tail"]);
}

#[test]
fn remove_property_from_all_areas() {
    let mut state = cat_dog();
    state.add_property(Area::None, "whiskers").unwrap();
    state.remove_property(Area::All, "whiskers");
    assert!(state.general().is_empty());
    assert!(state.none().is_empty());
}

#[test]
fn move_property_between_areas() {
    let mut state = cat_dog();
    state.move_property(Area::Class1, Area::None, "purr").unwrap();
    assert!(state.class1().properties.is_empty());
    assert_eq!(state.none(), ["purr".to_string()]);
}

#[test]
fn move_property_to_same_area_is_noop() {
    let mut state = cat_dog();
    let before = state.clone();
    state.move_property(Area::Class2, Area::Class2, "tail").unwrap();
    assert_eq!(state, before);
}

#[test]
fn move_property_rejects_all() {
    let mut state = cat_dog();
    assert!(state.move_property(Area::All, Area::None, "purr").is_err());
    assert!(state.move_property(Area::Class1, Area::All, "purr").is_err());
}

#[test]
fn rename_class_trims_and_rejects_blank() {
    let mut state = cat_dog();
    state.rename_class(Slot::Class2, "  Wolf ").unwrap();
    assert_eq!(state.class2().name, "Wolf");

    let err = state.rename_class(Slot::Class1, "   ").unwrap_err();
    assert_eq!(err, ValidationError::EmptyClassName);
    assert_eq!(state.class1().name, "Cat");
}

#[test]
fn rename_property_in_place() {
    let mut state = cat_dog();
    state.rename_property(Area::Class2, "tail", "tails");
    assert_eq!(state.class2().properties, vec!["bark", "tails"]);
}

#[test]
fn rename_onto_existing_property_degenerates_to_removal() {
    let mut state = cat_dog();
    state.rename_property(Area::Class2, "tail", "bark");
    assert_eq!(state.class2().properties, vec!["bark"]);
}

#[test]
fn rename_property_across_all_areas() {
    let mut state = cat_dog();
    state.add_property(Area::None, "purr").unwrap();
    state.rename_property(Area::All, "purr", "meow");
    assert_eq!(state.class1().properties, vec!["meow"]);
    assert_eq!(state.none(), ["meow".to_string()]);
}

// ---- persistence projection ----

#[test]
fn record_roundtrip_preserves_snapshot() {
    let mut state = cat_dog();
    state.feedback(Variant::None, &["gills"]);
    let record = state.to_record("u1");
    assert_eq!(record.user_id, "u1");
    let restored = ClassState::from_record(&record);
    assert_eq!(restored.snapshot(), state.snapshot());
}

#[test]
fn from_record_repairs_overlap_and_duplicates() {
    let mut record = cat_dog().to_record("u1");
    record.class1_props = vec!["purr".into(), "bark".into(), "purr".into()];
    let state = ClassState::from_record(&record);
    assert_eq!(state.class1().properties, vec!["purr"]);
    assert!(state.general().contains(&"bark".to_string()));
    assert_exclusive(&state);
}

#[test]
fn from_unnamed_record_keeps_collections() {
    let mut record = slc_core::models::UserRecord::empty("u1");
    record.none_props = vec!["stray".into()];
    let state = ClassState::from_record(&record);
    assert!(!state.is_initialized());
    assert_eq!(state.none(), ["stray".to_string()]);
}

#[test]
fn edits_before_init_survive_record_roundtrip() {
    let mut state = ClassState::new();
    state.feedback(Variant::Class1, &["fur"]);
    state.add_property(Area::None, "gills").unwrap();
    assert!(!state.is_initialized());

    let restored = ClassState::from_record(&state.to_record("u1"));
    assert_eq!(restored.snapshot(), state.snapshot());
    assert_eq!(restored.class1().properties, vec!["fur"]);
    assert_eq!(restored.none(), ["gills".to_string()]);
}
