//! Collection CRUD over the key-value store.
//!
//! Every operation is one full read-modify-write of the serialized
//! collection. Handlers run to completion on the single store handle, so two
//! cycles never interleave in-process; across processes the last write wins.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use folio_core::{ContentRecord, ItemId, SiteSettings};

use super::{StoreBackend, StoreError, seed};

/// Errors raised by the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backend failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The stored blob under a key does not parse as its collection.
    #[error("corrupt data under {key}: {reason}")]
    Corrupt { key: String, reason: String },

    /// A record failed to serialize or a patch produced an invalid record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// The content store service.
///
/// Constructed once at startup and handed to consumers through application
/// state; cloning shares the backend.
#[derive(Clone)]
pub struct ContentStore {
    backend: Arc<dyn StoreBackend>,
}

impl ContentStore {
    /// Create a store over a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    // =========================================================================
    // Collection access
    // =========================================================================

    /// Read a collection, surfacing corruption explicitly.
    ///
    /// An absent key installs the seed default, persists it, and returns it,
    /// so a second read sees the identical collection without re-seeding.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Corrupt` when the stored blob does not parse,
    /// and `ContentError::Store` when the backend fails. Nothing is repaired
    /// or overwritten on either failure.
    pub fn get_checked<R: ContentRecord>(&self) -> Result<Vec<R>, ContentError> {
        let key = R::KIND.storage_key();

        if let Some(raw) = self.backend.load(key)? {
            return serde_json::from_str(&raw).map_err(|e| ContentError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }

        // First read: install the seed default.
        let defaults = seed::collection::<R>();
        self.persist(key, &defaults)?;
        tracing::info!(key, count = defaults.len(), "Seeded collection");
        Ok(defaults)
    }

    /// Read a collection, falling back softly to the seed default.
    ///
    /// Corrupt data is logged and replaced in memory only; the stored blob
    /// is left untouched for inspection.
    #[must_use]
    pub fn get<R: ContentRecord>(&self) -> Vec<R> {
        match self.get_checked::<R>() {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(kind = %R::KIND, error = %e, "Falling back to seed default");
                seed::collection::<R>()
            }
        }
    }

    /// Overwrite a collection.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if serialization or the backend write fails.
    pub fn set<R: ContentRecord>(&self, items: &[R]) -> Result<(), ContentError> {
        self.persist(R::KIND.storage_key(), items)
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Insert a record at the end of its collection.
    ///
    /// The record's id is assigned as `max(existing ids) + 1` (1 for an empty
    /// collection). Note that deleting the highest-numbered record frees its
    /// id for the next insert; display order is insertion order either way.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the collection cannot be read or written.
    pub fn add<R: ContentRecord>(&self, mut item: R) -> Result<R, ContentError> {
        let mut items = self.get_checked::<R>()?;

        let next_id = items
            .iter()
            .map(|existing| existing.id())
            .max()
            .map_or(ItemId::FIRST, |max| max.next());
        item.set_id(next_id);

        items.push(item.clone());
        self.set(&items)?;
        Ok(item)
    }

    /// Shallow-merge a patch onto the record with the given id.
    ///
    /// Patch fields override, unspecified fields are retained, and the `id`
    /// field is pinned. Returns `Ok(None)` without writing when no record
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidRecord` when the merged record no longer
    /// matches the collection schema; the collection is left unchanged.
    pub fn update<R: ContentRecord>(
        &self,
        id: ItemId,
        patch: &Value,
    ) -> Result<Option<R>, ContentError> {
        let mut items = self.get_checked::<R>()?;

        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };
        let Some(existing) = items.get(index) else {
            return Ok(None);
        };

        let merged = merge_shallow(existing, patch, id)?;
        if let Some(slot) = items.get_mut(index) {
            *slot = merged.clone();
        }
        self.set(&items)?;
        Ok(Some(merged))
    }

    /// Remove the record with the given id; absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the collection cannot be read or written.
    pub fn remove<R: ContentRecord>(&self, id: ItemId) -> Result<(), ContentError> {
        let mut items = self.get_checked::<R>()?;
        items.retain(|item| item.id() != id);
        self.set(&items)
    }

    // =========================================================================
    // Settings record
    // =========================================================================

    /// Read the settings record, surfacing corruption explicitly.
    ///
    /// An absent key installs and persists the seed settings.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Corrupt` when the stored blob does not parse.
    pub fn settings_checked(&self) -> Result<SiteSettings, ContentError> {
        let key = SiteSettings::STORAGE_KEY;

        if let Some(raw) = self.backend.load(key)? {
            return serde_json::from_str(&raw).map_err(|e| ContentError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }

        let defaults = seed::settings();
        self.persist(key, &defaults)?;
        tracing::info!(key, "Seeded settings");
        Ok(defaults)
    }

    /// Read the settings record, falling back softly to an empty record.
    #[must_use]
    pub fn settings(&self) -> SiteSettings {
        match self.settings_checked() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to empty settings");
                SiteSettings::default()
            }
        }
    }

    /// Overwrite the settings record.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if serialization or the backend write fails.
    pub fn set_settings(&self, settings: &SiteSettings) -> Result<(), ContentError> {
        self.persist(SiteSettings::STORAGE_KEY, settings)
    }

    // =========================================================================
    // Raw keys (session, UI preferences)
    // =========================================================================

    /// Read a raw string key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.backend.load(key)
    }

    /// Overwrite a raw string key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.save(key, value)
    }

    /// Delete a raw string key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    pub fn remove_raw(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    fn persist<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), ContentError> {
        let raw =
            serde_json::to_string(value).map_err(|e| ContentError::InvalidRecord(e.to_string()))?;
        self.backend.save(key, &raw)?;
        Ok(())
    }
}

/// Shallow-merge `patch` over `existing`: top-level patch keys override, the
/// id is pinned, and the result must still match the record schema.
fn merge_shallow<R: ContentRecord>(
    existing: &R,
    patch: &Value,
    id: ItemId,
) -> Result<R, ContentError> {
    let mut base =
        serde_json::to_value(existing).map_err(|e| ContentError::InvalidRecord(e.to_string()))?;

    if let (Value::Object(base_map), Value::Object(patch_map)) = (&mut base, patch) {
        for (field, value) in patch_map {
            if field == "id" {
                continue;
            }
            base_map.insert(field.clone(), value.clone());
        }
    }

    let mut merged: R =
        serde_json::from_value(base).map_err(|e| ContentError::InvalidRecord(e.to_string()))?;
    merged.set_id(id);
    Ok(merged)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::MemoryBackend;
    use super::*;
    use folio_core::{Message, MessageStatus, Project, PublishStatus};
    use serde_json::json;

    fn store() -> ContentStore {
        ContentStore::new(Arc::new(MemoryBackend::new()))
    }

    fn bare_project(title: &str) -> Project {
        Project {
            id: ItemId::default(),
            title: title.to_string(),
            category: "Test".to_string(),
            tech: Vec::new(),
            description: "A test project".to_string(),
            status: PublishStatus::Draft,
            featured: false,
            live_url: String::new(),
            github_url: String::new(),
            image: String::new(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            views: 0,
        }
    }

    #[test]
    fn test_first_read_seeds_and_persists() {
        let store = store();
        let projects = store.get::<Project>();
        assert_eq!(projects.len(), 5);

        // Second read returns the identical items without re-seeding.
        let again = store.get::<Project>();
        assert_eq!(again, projects);
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let store = store();
        let seeded = store.get::<Project>();
        let max = seeded.iter().map(|p| p.id()).max().unwrap();

        let stored = store.add(bare_project("New thing")).unwrap();
        assert_eq!(stored.id(), max.next());

        let all = store.get::<Project>();
        assert!(all.iter().any(|p| p.id() == stored.id()));
        assert!(all.iter().all(|p| p.id() <= stored.id()));
    }

    #[test]
    fn test_add_into_gapped_ids_uses_max() {
        let store = store();
        let mut items: Vec<Project> = [1, 2, 5]
            .into_iter()
            .map(|id| {
                let mut p = bare_project(&format!("p{id}"));
                p.set_id(ItemId::new(id));
                p
            })
            .collect();
        items.sort_by_key(folio_core::ContentRecord::id);
        store.set(&items).unwrap();

        let stored = store.add(bare_project("X")).unwrap();
        assert_eq!(stored.id(), ItemId::new(6));
    }

    #[test]
    fn test_add_to_empty_collection_starts_at_one() {
        let store = store();
        store.set::<Project>(&[]).unwrap();
        let stored = store.add(bare_project("first")).unwrap();
        assert_eq!(stored.id(), ItemId::FIRST);
    }

    #[test]
    fn test_update_patches_only_named_fields() {
        let store = store();
        let before = store.get::<Project>();
        let target = before.first().unwrap().clone();

        let patched = store
            .update::<Project>(target.id(), &json!({ "title": "Renamed" }))
            .unwrap()
            .unwrap();

        assert_eq!(patched.title, "Renamed");
        assert_eq!(patched.category, target.category);
        assert_eq!(patched.description, target.description);
        assert_eq!(patched.id(), target.id());
    }

    #[test]
    fn test_update_empty_patch_is_identity() {
        let store = store();
        let before = store.get::<Project>();
        let target = before.first().unwrap().clone();

        let patched = store
            .update::<Project>(target.id(), &json!({}))
            .unwrap()
            .unwrap();
        assert_eq!(patched, target);
        assert_eq!(store.get::<Project>(), before);
    }

    #[test]
    fn test_update_missing_id_writes_nothing() {
        let store = store();
        let before = store.get::<Project>();

        let result = store
            .update::<Project>(ItemId::new(999), &json!({ "title": "x" }))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.get::<Project>(), before);
    }

    #[test]
    fn test_update_cannot_move_id() {
        let store = store();
        let target = store.get::<Project>().first().unwrap().clone();

        let patched = store
            .update::<Project>(target.id(), &json!({ "id": 42, "title": "Kept" }))
            .unwrap()
            .unwrap();
        assert_eq!(patched.id(), target.id());
    }

    #[test]
    fn test_remove_deletes_and_is_idempotent() {
        let store = store();
        let seeded = store.get::<Project>();
        let victim = seeded.first().unwrap().id();

        store.remove::<Project>(victim).unwrap();
        assert!(store.get::<Project>().iter().all(|p| p.id() != victim));

        let after = store.get::<Project>();
        store.remove::<Project>(victim).unwrap();
        assert_eq!(store.get::<Project>(), after);
    }

    #[test]
    fn test_corrupt_blob_surfaces_then_defaults_softly() {
        let store = store();
        store
            .set_raw(folio_core::CollectionKind::Projects.storage_key(), "not json")
            .unwrap();

        let checked = store.get_checked::<Project>();
        assert!(matches!(checked, Err(ContentError::Corrupt { .. })));

        // The soft accessor falls back to the seed without repairing the key.
        let items = store.get::<Project>();
        assert_eq!(items.len(), 5);
        assert_eq!(
            store
                .get_raw(folio_core::CollectionKind::Projects.storage_key())
                .unwrap()
                .as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn test_settings_seed_and_overwrite() {
        let store = store();
        let settings = store.settings();
        assert!(!settings.site_name.is_empty());

        let mut updated = settings.clone();
        updated.tagline = "New tagline".to_string();
        store.set_settings(&updated).unwrap();
        assert_eq!(store.settings().tagline, "New tagline");
    }

    #[test]
    fn test_messages_collection_round_trip() {
        let store = store();
        let seeded = store.get::<Message>();
        assert_eq!(seeded.len(), 5);
        let unread = seeded
            .iter()
            .filter(|m| m.status == MessageStatus::Unread)
            .count();
        assert_eq!(unread, 2);
    }
}
