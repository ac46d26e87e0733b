//! Mock session/auth gate for the admin demo.
//!
//! Credentials are a fixed two-entry table and the session is one record in
//! the content store. The gate is advisory: everything runs client-side of
//! any real trust boundary and exists only to make the demo feel like a CMS.

mod error;

pub use error::AuthError;

use chrono::{DateTime, TimeDelta, Utc};

use folio_core::{AdminRole, AdminUserId};

use crate::models::{AdminSession, store_keys};
use crate::store::ContentStore;

/// Session lifetime without "remember me".
const SESSION_TTL_DAYS: i64 = 1;

/// Session lifetime with "remember me".
const REMEMBERED_SESSION_TTL_DAYS: i64 = 30;

/// A fixed credential record.
struct Credential {
    id: AdminUserId,
    email: &'static str,
    secret: &'static str,
    name: &'static str,
    role: AdminRole,
    initials: &'static str,
}

/// The demo credential table. Not a real authentication boundary.
const CREDENTIALS: [Credential; 2] = [
    Credential {
        id: AdminUserId::new(1),
        email: "admin@vc.com",
        secret: "Admin@123",
        name: "V Chaitanya",
        role: AdminRole::SuperAdmin,
        initials: "VC",
    },
    Credential {
        id: AdminUserId::new(2),
        email: "editor@vc.com",
        secret: "Editor@123",
        name: "Editor User",
        role: AdminRole::Editor,
        initials: "EU",
    },
];

/// Admin authentication service.
#[derive(Clone)]
pub struct AuthService {
    store: ContentStore,
}

impl AuthService {
    /// Create an auth service over the content store.
    #[must_use]
    pub const fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Attempt a login against the fixed credential table.
    ///
    /// On a match, persists and returns a session expiring in one day (or 30
    /// with `remember`). On a mismatch returns `Ok(None)`; callers surface a
    /// single generic message either way.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the session record cannot be persisted.
    pub fn login(
        &self,
        identifier: &str,
        secret: &str,
        remember: bool,
    ) -> Result<Option<AdminSession>, AuthError> {
        self.login_at(identifier, secret, remember, Utc::now())
    }

    /// [`Self::login`] with an explicit clock, for tests.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the session record cannot be persisted.
    pub fn login_at(
        &self,
        identifier: &str,
        secret: &str,
        remember: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<AdminSession>, AuthError> {
        let Some(credential) = CREDENTIALS
            .iter()
            .find(|c| c.email == identifier && c.secret == secret)
        else {
            tracing::info!("Rejected login attempt");
            return Ok(None);
        };

        let ttl_days = if remember {
            REMEMBERED_SESSION_TTL_DAYS
        } else {
            SESSION_TTL_DAYS
        };

        let session = AdminSession {
            id: credential.id,
            name: credential.name.to_string(),
            role: credential.role,
            initials: credential.initials.to_string(),
            expires_at: now + TimeDelta::days(ttl_days),
        };

        let raw = serde_json::to_string(&session)?;
        self.store.set_raw(store_keys::SESSION, &raw)?;
        tracing::info!(admin = %session.name, remember, "Admin logged in");

        Ok(Some(session))
    }

    /// Read the current session.
    ///
    /// Absent, malformed, or expired records are purged and reported as
    /// absent; there is no refresh, an expired session needs a fresh login.
    #[must_use]
    pub fn session(&self) -> Option<AdminSession> {
        self.session_at(Utc::now())
    }

    /// [`Self::session`] with an explicit clock, for tests.
    #[must_use]
    pub fn session_at(&self, now: DateTime<Utc>) -> Option<AdminSession> {
        let raw = self.store.get_raw(store_keys::SESSION).ok().flatten()?;

        let Ok(session) = serde_json::from_str::<AdminSession>(&raw) else {
            tracing::warn!("Purging malformed session record");
            self.logout();
            return None;
        };

        if !session.is_valid_at(now) {
            tracing::info!(admin = %session.name, "Purging expired session");
            self.logout();
            return None;
        }

        Some(session)
    }

    /// Destroy the persisted session unconditionally.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove_raw(store_keys::SESSION) {
            tracing::warn!(error = %e, "Failed to remove session record");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use std::sync::Arc;

    fn service() -> AuthService {
        AuthService::new(ContentStore::new(Arc::new(MemoryBackend::new())))
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let auth = service();
        let session = auth
            .login("admin@vc.com", "Admin@123", false)
            .unwrap()
            .expect("session");
        assert_eq!(session.name, "V Chaitanya");
        assert_eq!(session.role, AdminRole::SuperAdmin);
        assert_eq!(session.initials, "VC");
        assert!(auth.session().is_some());
    }

    #[test]
    fn test_login_with_unknown_pair_persists_nothing() {
        let auth = service();
        assert!(auth.login("admin@vc.com", "wrong", false).unwrap().is_none());
        assert!(auth.login("nobody@vc.com", "Admin@123", false).unwrap().is_none());
        assert!(
            auth.store.get_raw(store_keys::SESSION).unwrap().is_none(),
            "no session key may be written on failure"
        );
    }

    #[test]
    fn test_session_expires_after_one_day_without_remember() {
        let auth = service();
        let now = Utc::now();
        auth.login_at("admin@vc.com", "Admin@123", false, now)
            .unwrap()
            .expect("session");

        assert!(auth.session_at(now + TimeDelta::hours(23)).is_some());
        assert!(auth.session_at(now + TimeDelta::days(1)).is_none());
        // The expired record was purged, not just hidden.
        assert!(auth.store.get_raw(store_keys::SESSION).unwrap().is_none());
    }

    #[test]
    fn test_remembered_session_survives_the_one_day_mark() {
        let auth = service();
        let now = Utc::now();
        auth.login_at("admin@vc.com", "Admin@123", true, now)
            .unwrap()
            .expect("session");

        assert!(auth.session_at(now + TimeDelta::days(1)).is_some());
        assert!(auth.session_at(now + TimeDelta::days(29)).is_some());
        assert!(auth.session_at(now + TimeDelta::days(30)).is_none());
    }

    #[test]
    fn test_logout_destroys_session() {
        let auth = service();
        auth.login("editor@vc.com", "Editor@123", false).unwrap();
        assert!(auth.session().is_some());
        auth.logout();
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_malformed_session_record_is_purged() {
        let auth = service();
        auth.store.set_raw(store_keys::SESSION, "{not json").unwrap();
        assert!(auth.session().is_none());
        assert!(auth.store.get_raw(store_keys::SESSION).unwrap().is_none());
    }

    #[test]
    fn test_session_never_carries_the_secret() {
        let auth = service();
        auth.login("admin@vc.com", "Admin@123", false).unwrap();
        let raw = auth.store.get_raw(store_keys::SESSION).unwrap().unwrap();
        assert!(!raw.contains("Admin@123"));
    }
}
