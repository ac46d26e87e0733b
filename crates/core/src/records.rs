//! Content record schemas for the CMS collections.
//!
//! Each collection kind stores an ordered sequence of one record type,
//! serialized as a JSON array under a single storage key. Records are
//! validated at the store boundary by deserializing into these types rather
//! than being trusted as free-form maps.
//!
//! Field names serialize in camelCase to match the stored JSON blobs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::{AccountStatus, AdminRole, Email, ItemId, MessageStatus, PublishStatus};

/// The fixed set of content collections.
///
/// `settings` is a single record rather than a collection and is addressed
/// separately; see [`SiteSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Projects,
    Skills,
    Experience,
    Education,
    Messages,
    Media,
    Users,
    PageViews,
}

impl CollectionKind {
    /// All collection kinds, in dashboard display order.
    pub const ALL: [Self; 8] = [
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Messages,
        Self::Media,
        Self::Users,
        Self::PageViews,
    ];

    /// The storage key this collection persists under.
    #[must_use]
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Self::Projects => "cms_projects",
            Self::Skills => "cms_skills",
            Self::Experience => "cms_experience",
            Self::Education => "cms_education",
            Self::Messages => "cms_messages",
            Self::Media => "cms_media",
            Self::Users => "cms_users",
            Self::PageViews => "cms_pageviews",
        }
    }

    /// The URL path segment this collection is addressed by in the admin API.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Messages => "messages",
            Self::Media => "media",
            Self::Users => "users",
            Self::PageViews => "page-views",
        }
    }

    /// Resolve a URL path segment back to a collection kind.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A record that can live in a content collection.
///
/// Implementors are plain serde structs; the associated [`CollectionKind`]
/// ties the schema to its storage key so a record cannot be written into the
/// wrong collection.
pub trait ContentRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The collection this record type belongs to.
    const KIND: CollectionKind;

    /// The record's id, unique within its collection.
    fn id(&self) -> ItemId;

    /// Assign the record's id (done by the store on insert).
    fn set_id(&mut self, id: ItemId);
}

macro_rules! impl_content_record {
    ($ty:ty, $kind:expr) => {
        impl ContentRecord for $ty {
            const KIND: CollectionKind = $kind;

            fn id(&self) -> ItemId {
                self.id
            }

            fn set_id(&mut self, id: ItemId) {
                self.id = id;
            }
        }
    };
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: ItemId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub image: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub views: u64,
}

impl_content_record!(Project, CollectionKind::Projects);

/// A single named skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A named group of skills (e.g. "Frontend").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(default)]
    pub id: ItemId,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl_content_record!(SkillCategory, CollectionKind::Skills);

/// A work history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub id: ItemId,
    pub company: String,
    pub role: String,
    /// Engagement type, e.g. "Full-time" or "Freelance".
    #[serde(rename = "type")]
    pub engagement: String,
    /// Start month, `YYYY-MM`.
    pub start: String,
    /// End month, `YYYY-MM`; empty while `current` is set.
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub location: String,
}

impl_content_record!(ExperienceEntry, CollectionKind::Experience);

/// Whether an education entry is a degree or a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EducationKind {
    #[default]
    Degree,
    Certification,
}

/// A degree or certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub id: ItemId,
    pub institution: String,
    pub degree: String,
    pub year: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: EducationKind,
}

impl_content_record!(EducationEntry, CollectionKind::Education);

/// A contact form message received through the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub status: MessageStatus,
}

impl Message {
    /// Whether the message is still unread.
    #[must_use]
    pub fn is_unread(&self) -> bool {
        self.status == MessageStatus::Unread
    }
}

impl_content_record!(Message, CollectionKind::Messages);

/// An uploaded media asset (metadata only; the demo stores no bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: String,
    #[serde(default)]
    pub url: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub thumb: String,
}

impl_content_record!(MediaAsset, CollectionKind::Media);

/// A CMS user record (display data, distinct from the login credential table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    pub email: Email,
    pub role: AdminRole,
    #[serde(default)]
    pub status: AccountStatus,
    pub last_login: NaiveDateTime,
    #[serde(default)]
    pub initials: String,
}

impl_content_record!(UserRecord, CollectionKind::Users);

/// One day of page-view counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewStat {
    #[serde(default)]
    pub id: ItemId,
    pub date: NaiveDate,
    pub views: u64,
}

impl_content_record!(PageViewStat, CollectionKind::PageViews);

/// Site-wide settings, stored as a single record under its own key.
///
/// Defaults to an empty record when nothing is stored and no seed applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub site_title: String,
    pub meta_desc: String,
    pub meta_keywords: String,
    pub open_to_work: bool,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
}

impl SiteSettings {
    /// The storage key the settings record persists under.
    pub const STORAGE_KEY: &'static str = "cms_settings";
}
