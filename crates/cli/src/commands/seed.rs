//! Seed the admin content store with the demo collections.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use folio_core::CollectionKind;

use folio_admin::store::{FileBackend, StoreBackend, seed};

use super::CommandError;

/// Seed every collection plus the settings record.
///
/// Existing keys are left alone unless `force` is set; the session and UI
/// preference keys are never touched.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run(data_dir: &str, force: bool) -> Result<(), CommandError> {
    let backend = FileBackend::new(Path::new(data_dir))?;
    let backend: Arc<dyn StoreBackend> = Arc::new(backend);

    let mut seeded = 0usize;
    for kind in CollectionKind::ALL {
        let key = kind.storage_key();
        if !force && backend.load(key)?.is_some() {
            info!(key, "Already present, skipping");
            continue;
        }
        let raw = serde_json::to_string(&seed::seed_value(kind))?;
        backend.save(key, &raw)?;
        info!(key, "Seeded");
        seeded += 1;
    }

    let settings_key = folio_core::SiteSettings::STORAGE_KEY;
    if force || backend.load(settings_key)?.is_none() {
        let raw = serde_json::to_string(&seed::settings())?;
        backend.save(settings_key, &raw)?;
        info!(key = settings_key, "Seeded");
        seeded += 1;
    }

    info!(seeded, "Seeding complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_then_skip_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        run(path, false).unwrap();

        let projects = std::fs::read_to_string(dir.path().join("cms_projects.json")).unwrap();
        assert!(projects.contains("AI Resume Builder"));

        // Mutate, reseed without force, mutation survives.
        std::fs::write(dir.path().join("cms_projects.json"), "[]").unwrap();
        run(path, false).unwrap();
        let projects = std::fs::read_to_string(dir.path().join("cms_projects.json")).unwrap();
        assert_eq!(projects, "[]");

        // Force restores the seed.
        run(path, true).unwrap();
        let projects = std::fs::read_to_string(dir.path().join("cms_projects.json")).unwrap();
        assert!(projects.contains("AI Resume Builder"));
    }
}
