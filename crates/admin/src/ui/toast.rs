//! Toast notifications.
//!
//! Handlers surface toasts across a redirect: the mutation redirects with
//! the toast encoded in the query string, and the next page render picks it
//! up and shows an auto-dismissing notification.

use serde::Deserialize;

/// Toast flavor, each with a fixed icon and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// The fixed icon for this kind.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    /// The default title for this kind.
    #[must_use]
    pub const fn default_title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// The CSS modifier / query value for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a query value; unknown values fall back to `Info`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u64,
}

impl Toast {
    /// Default time a toast stays on screen before dismissing itself.
    pub const DEFAULT_DURATION_MS: u64 = 3500;

    /// Create a toast with the kind's default title and duration.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            message: message.into(),
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }

    /// Override the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    /// An error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    /// An info toast.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    /// A warning toast.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    /// Encode for a redirect query string.
    #[must_use]
    pub fn query(&self) -> String {
        format!(
            "toast={}&toast_kind={}",
            urlencoding::encode(&self.message),
            self.kind.as_str()
        )
    }

    /// Decode from the page's query parameters.
    #[must_use]
    pub fn from_query(query: &ToastQuery) -> Option<Self> {
        let message = query.toast.as_ref()?;
        let kind = query
            .toast_kind
            .as_deref()
            .map_or(ToastKind::Info, ToastKind::parse);
        Some(Self::new(message.clone(), kind))
    }
}

/// Query parameters carrying a toast across a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct ToastQuery {
    pub toast: Option<String>,
    pub toast_kind: Option<String>,
}
