//! In-memory activity catalog keyed by id.
//!
//! The catalog is the seam collection-wide validation runs over: a
//! minimal id-to-record index, not a storage engine. It is plain data
//! with no interior locking - the model is synchronous and performs no
//! I/O, so a concurrent host wraps the whole catalog in its own reader/
//! writer lock.

use std::collections::HashMap;

use crate::activity::Activity;
use crate::validate::{validate_collection, ValidationResult};

/// Error types for catalog reference operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Insert-only insertion over an id the catalog already holds.
    #[error("activity '{id}' already exists")]
    DuplicateIdConflict { id: String },

    /// A `parent` or `variants` entry pointed at an id the catalog does
    /// not hold.
    #[error("activity '{from_id}' references missing id '{missing_id}'")]
    DanglingReference {
        from_id: String,
        missing_id: String,
    },

    /// The id a resolution was asked about is itself absent.
    #[error("activity not found: {id}")]
    NotFound { id: String },
}

/// Collection of activities indexed by id.
///
/// Uniqueness is structural: the index holds at most one record per id.
/// Parent/variant references are plain id strings and may dangle between
/// batch edits; [`ActivityCatalog::validate`] surfaces every
/// inconsistency without repairing any of them.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: HashMap<String, Activity>,
}

impl ActivityCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
        }
    }

    /// Insert a new activity, refusing to displace an existing record.
    pub fn insert(&mut self, activity: Activity) -> Result<(), CatalogError> {
        if self.activities.contains_key(&activity.id) {
            return Err(CatalogError::DuplicateIdConflict { id: activity.id });
        }
        tracing::debug!(id = %activity.id, "inserted activity");
        self.activities.insert(activity.id.clone(), activity);
        Ok(())
    }

    /// Insert or replace by id, returning the displaced record if any.
    pub fn upsert(&mut self, activity: Activity) -> Option<Activity> {
        tracing::debug!(id = %activity.id, "upserted activity");
        self.activities.insert(activity.id.clone(), activity)
    }

    /// Look up one activity by id.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    /// Remove an activity by id, returning it if it was held.
    ///
    /// References other activities hold to the removed id become
    /// dangling; nothing cascades, repair is the caller's decision.
    pub fn remove(&mut self, id: &str) -> Option<Activity> {
        let removed = self.activities.remove(id);
        if removed.is_some() {
            tracing::debug!(id = %id, "removed activity");
        }
        removed
    }

    /// Dereference an activity's `variants` list to full records, in
    /// list order.
    ///
    /// Fails on the first missing target; a partial list is never
    /// returned.
    pub fn resolve_variants(&self, id: &str) -> Result<Vec<&Activity>, CatalogError> {
        let activity = self
            .activities
            .get(id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        let mut resolved = Vec::with_capacity(activity.variants.len());
        for variant_id in &activity.variants {
            let variant = self.activities.get(variant_id).ok_or_else(|| {
                CatalogError::DanglingReference {
                    from_id: id.to_string(),
                    missing_id: variant_id.clone(),
                }
            })?;
            resolved.push(variant);
        }
        Ok(resolved)
    }

    /// Dereference an activity's `parent`. Roots resolve to `Ok(None)`.
    pub fn resolve_parent(&self, id: &str) -> Result<Option<&Activity>, CatalogError> {
        let activity = self
            .activities
            .get(id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        match activity.parent.as_deref() {
            None => Ok(None),
            Some(parent_id) => match self.activities.get(parent_id) {
                Some(parent) => Ok(Some(parent)),
                None => Err(CatalogError::DanglingReference {
                    from_id: id.to_string(),
                    missing_id: parent_id.to_string(),
                }),
            },
        }
    }

    /// Run the relational consistency check over everything held.
    pub fn validate(&self) -> ValidationResult {
        validate_collection(self.activities.values())
    }

    /// Iterate over every held activity, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    /// Number of activities held.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
