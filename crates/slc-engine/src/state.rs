//! ClassState: the mutable two-class model.
//!
//! Holds two named classes plus the "general" (shared by both classes) and
//! "none" (recognized by neither) collections. `class1 ∩ class2` is empty
//! after every public mutation; `restore_exclusivity` is the only place that
//! re-establishes it.

use slc_core::errors::ValidationError;
use slc_core::models::{Area, Class, ClassifyOutcome, Slot, Snapshot, UserRecord, Variant};

use crate::classification::{choose, explain};
use crate::set_algebra::{
    difference, extract_intersection, normalize, normalize_and_dedupe, push_unique, remove_all,
    sorted, union,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassState {
    class1: Class,
    class2: Class,
    general: Vec<String>,
    none: Vec<String>,
}

impl ClassState {
    /// An uninitialized state: both names empty, all collections empty.
    ///
    /// Uninitialized only means unnamed; feedback and edits still apply.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        !self.class1.name.is_empty() || !self.class2.name.is_empty()
    }

    pub fn class1(&self) -> &Class {
        &self.class1
    }

    pub fn class2(&self) -> &Class {
        &self.class2
    }

    pub fn general(&self) -> &[String] {
        &self.general
    }

    pub fn none(&self) -> &[String] {
        &self.none
    }

    /// Start (or restart) a session with two classes.
    ///
    /// Class names are trimmed.
    /// Properties shared by both classes are moved into general. Earlier
    /// general and none entries are kept.
    pub fn init(&mut self, class1: Class, class2: Class) {
        let props1 = normalize_and_dedupe(&class1.properties);
        let props2 = normalize_and_dedupe(&class2.properties);
        let (only1, only2, shared) = extract_intersection(&props1, &props2);

        self.class1 = Class {
            name: class1.name.trim().to_string(),
            properties: only1,
        };
        self.class2 = Class {
            name: class2.name.trim().to_string(),
            properties: only2,
        };
        self.general = union(&self.general, &shared);
    }

    /// Classify one item. Never mutates state.
    pub fn classify<S: AsRef<str>>(&self, query: &[S]) -> ClassifyOutcome {
        let query = normalize_and_dedupe(query);

        let known = self.known();
        let unknown = difference(&query, &known);
        let (guess, hits) = choose(&self.class1, &self.class2, &query);
        let reason = explain(&guess, &hits);

        let recommendation = if guess.is_empty() {
            format!(
                "Please specify whether it is \"{}\" or \"{}\". Otherwise, unknown properties will be added to 'none'.",
                self.class1.name, self.class2.name
            )
        } else {
            "Please confirm or adjust the suggestion.".to_string()
        };

        ClassifyOutcome {
            guess,
            reason,
            known_hits: sorted(&hits),
            unknown: sorted(&unknown),
            recommendation,
        }
    }

    /// Apply the user's verdict on an item's properties.
    ///
    /// `None` feedback only records properties unknown to both classes and to
    /// general; anything already known is ignored.
    pub fn feedback<S: AsRef<str>>(&mut self, variant: Variant, properties: &[S]) {
        let properties = normalize_and_dedupe(properties);

        // Loaded state may not satisfy exclusivity yet.
        self.restore_exclusivity();

        match variant {
            Variant::Class1 => {
                self.class1.properties = union(&self.class1.properties, &properties);
            }
            Variant::Class2 => {
                self.class2.properties = union(&self.class2.properties, &properties);
            }
            Variant::None => {
                let unknown = difference(&properties, &self.known());
                if !unknown.is_empty() {
                    self.none = union(&self.none, &unknown);
                }
            }
        }

        self.restore_exclusivity();
    }

    /// Projection for display. Sorting happens here, never in storage.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            class1: self.class1.clone(),
            class2: self.class2.clone(),
            general_class: sorted(&self.general),
            none_class: sorted(&self.none),
        }
    }

    /// Move any property held by both classes into general.
    pub fn restore_exclusivity(&mut self) {
        let (only1, only2, shared) =
            extract_intersection(&self.class1.properties, &self.class2.properties);
        self.class1.properties = only1;
        self.class2.properties = only2;
        if !shared.is_empty() {
            self.general = union(&self.general, &shared);
        }
    }

    /// Union of both classes and general.
    fn known(&self) -> Vec<String> {
        union(
            &union(&self.class1.properties, &self.class2.properties),
            &self.general,
        )
    }

    fn collection_mut(&mut self, area: Area) -> Option<&mut Vec<String>> {
        match area {
            Area::Class1 => Some(&mut self.class1.properties),
            Area::Class2 => Some(&mut self.class2.properties),
            Area::General => Some(&mut self.general),
            Area::None => Some(&mut self.none),
            Area::All => None,
        }
    }

    fn concrete_mut(
        &mut self,
        area: Area,
        operation: &'static str,
    ) -> Result<&mut Vec<String>, ValidationError> {
        self.collection_mut(area)
            .ok_or(ValidationError::AreaNotAllowed {
                area: Area::All.as_str(),
                operation,
            })
    }

    // --- Single-property edits ---

    /// Add one property to one area. Idempotent.
    pub fn add_property(&mut self, area: Area, property: &str) -> Result<(), ValidationError> {
        let property = normalize(property);
        let target = self.concrete_mut(area, "add")?;
        if property.is_empty() {
            return Ok(());
        }
        push_unique(target, property);
        self.restore_exclusivity();
        Ok(())
    }

    /// Remove one property from one area, or from every area with `All`.
    /// Idempotent.
    pub fn remove_property(&mut self, area: Area, property: &str) {
        let property = normalize(property);
        if property.is_empty() {
            return;
        }
        for &target in area.targets() {
            if let Some(list) = self.collection_mut(target) {
                remove_all(list, property);
            }
        }
        self.restore_exclusivity();
    }

    /// Remove from `from`, then add to `to`. No-op when both are the same.
    pub fn move_property(
        &mut self,
        from: Area,
        to: Area,
        property: &str,
    ) -> Result<(), ValidationError> {
        if from == Area::All || to == Area::All {
            return Err(ValidationError::AreaNotAllowed {
                area: Area::All.as_str(),
                operation: "move",
            });
        }
        let property = normalize(property);
        if from == to || property.is_empty() {
            return Ok(());
        }
        if let Some(list) = self.collection_mut(from) {
            remove_all(list, property);
        }
        if let Some(list) = self.collection_mut(to) {
            push_unique(list, property);
        }
        self.restore_exclusivity();
        Ok(())
    }

    /// Rename one of the two classes. A blank name is rejected.
    pub fn rename_class(&mut self, slot: Slot, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyClassName);
        }
        let class = match slot {
            Slot::Class1 => &mut self.class1,
            Slot::Class2 => &mut self.class2,
        };
        class.name = name.to_string();
        Ok(())
    }

    /// Rename a property in place.
    ///
    /// In a collection that already holds `to`, the rename degenerates into
    /// removing `from`, so no duplicate is created.
    pub fn rename_property(&mut self, area: Area, from: &str, to: &str) {
        let (from, to) = (normalize(from), normalize(to));
        if from.is_empty() || to.is_empty() || from == to {
            return;
        }
        for &target in area.targets() {
            if let Some(list) = self.collection_mut(target) {
                rename_in(list, from, to);
            }
        }
        self.restore_exclusivity();
    }

    // --- Persistence projection ---

    pub fn to_record(&self, user_id: &str) -> UserRecord {
        UserRecord {
            user_id: user_id.to_string(),
            class1_name: self.class1.name.clone(),
            class2_name: self.class2.name.clone(),
            class1_props: self.class1.properties.clone(),
            class2_props: self.class2.properties.clone(),
            general_props: self.general.clone(),
            none_props: self.none.clone(),
            updated_at: None,
        }
    }

    /// Rebuild from a persisted record, re-applying normalization.
    ///
    /// Collections are restored even when both names are empty, since edits
    /// and feedback are accepted before `init`.
    pub fn from_record(record: &UserRecord) -> Self {
        let mut state = Self {
            class1: Class {
                name: record.class1_name.clone(),
                properties: normalize_and_dedupe(&record.class1_props),
            },
            class2: Class {
                name: record.class2_name.clone(),
                properties: normalize_and_dedupe(&record.class2_props),
            },
            general: normalize_and_dedupe(&record.general_props),
            none: normalize_and_dedupe(&record.none_props),
        };
        state.restore_exclusivity();
        state
    }
}

fn rename_in(list: &mut Vec<String>, from: &str, to: &str) {
    if list.iter().any(|v| v == to) {
        remove_all(list, from);
        return;
    }
    for v in list.iter_mut() {
        if *v == from {
            *v = to.to_string();
        }
    }
}
