//! Status enums for content records.

use serde::{Deserialize, Serialize};

/// Publication status of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PublishStatus {
    Published,
    #[default]
    Draft,
    Archived,
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Published => write!(f, "Published"),
            Self::Draft => write!(f, "Draft"),
            Self::Archived => write!(f, "Archived"),
        }
    }
}

/// Read status of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unread => write!(f, "unread"),
            Self::Read => write!(f, "read"),
        }
    }
}

/// Account status of a CMS user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

/// Admin role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to all admin features including user management.
    SuperAdmin,
    /// Can create and edit content.
    Editor,
    /// Read-only access to content.
    Viewer,
}

impl AdminRole {
    /// Human-facing label, as shown in the admin header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Editor => write!(f, "editor"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_round_trip() {
        for role in [AdminRole::SuperAdmin, AdminRole::Editor, AdminRole::Viewer] {
            let s = role.to_string();
            assert_eq!(s.parse::<AdminRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_admin_role_rejects_unknown() {
        assert!("owner".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_publish_status_serde_names() {
        let json = serde_json::to_string(&PublishStatus::Published).unwrap();
        assert_eq!(json, "\"Published\"");
        let back: PublishStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(back, PublishStatus::Archived);
    }

    #[test]
    fn test_message_status_serde_names() {
        let json = serde_json::to_string(&MessageStatus::Unread).unwrap();
        assert_eq!(json, "\"unread\"");
    }
}
