//! Clear every store key.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use folio_core::{CollectionKind, SiteSettings};

use folio_admin::models::store_keys;
use folio_admin::store::{FileBackend, StoreBackend};

use super::CommandError;

/// Remove all collections, the settings record, the admin session, and the
/// UI preference keys.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn run(data_dir: &str) -> Result<(), CommandError> {
    let backend = FileBackend::new(Path::new(data_dir))?;
    let backend: Arc<dyn StoreBackend> = Arc::new(backend);

    for kind in CollectionKind::ALL {
        backend.remove(kind.storage_key())?;
    }
    backend.remove(SiteSettings::STORAGE_KEY)?;
    backend.remove(store_keys::SESSION)?;
    backend.remove(store_keys::THEME)?;
    backend.remove(store_keys::SIDEBAR_COLLAPSED)?;

    info!(data_dir, "Store cleared");
    Ok(())
}
