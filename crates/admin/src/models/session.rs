//! Session-related types for admin authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::{AdminRole, AdminUserId};

/// The persisted admin login record.
///
/// Created at login, read on every admin page load, destroyed on logout or
/// expiry. Never carries the credential secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    /// Admin's id in the credential table.
    pub id: AdminUserId,
    /// Admin's display name.
    pub name: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// Avatar initials shown in the header.
    pub initials: String,
    /// Instant the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Whether the session is still valid at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Store keys for admin state.
pub mod store_keys {
    /// Key for the persisted admin session.
    pub const SESSION: &str = "folio_admin_session";

    /// Key for the UI theme preference.
    pub const THEME: &str = "folio_admin_theme";

    /// Key for the sidebar collapse preference.
    pub const SIDEBAR_COLLAPSED: &str = "folio_sidebar_collapsed";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_session_validity_window() {
        let now = Utc::now();
        let session = AdminSession {
            id: AdminUserId::new(1),
            name: "V Chaitanya".to_string(),
            role: AdminRole::SuperAdmin,
            initials: "VC".to_string(),
            expires_at: now + TimeDelta::days(1),
        };

        assert!(session.is_valid_at(now));
        // Expiry instant itself is no longer valid.
        assert!(!session.is_valid_at(session.expires_at));
        assert!(!session.is_valid_at(now + TimeDelta::days(2)));
    }
}
