//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use folio_core::{Message, MessageStatus, PageViewStat, Project, PublishStatus};

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::{Chrome, chrome};
use crate::state::AppState;
use crate::ui::ToastQuery;

/// Dashboard metrics.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub projects: usize,
    pub published: usize,
    pub unread_messages: usize,
    pub week_views: u64,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: Chrome,
    pub metrics: DashboardMetrics,
    pub recent_messages: Vec<Message>,
    pub page_views: Vec<PageViewStat>,
}

/// Render the dashboard.
///
/// GET /
#[instrument(skip(state, toast_query))]
pub async fn index(
    RequireAdminAuth(session): RequireAdminAuth,
    State(state): State<AppState>,
    Query(toast_query): Query<ToastQuery>,
) -> DashboardTemplate {
    let projects = state.store().get::<Project>();
    let messages = state.store().get::<Message>();
    let page_views = state.store().get::<PageViewStat>();

    let metrics = DashboardMetrics {
        projects: projects.len(),
        published: projects
            .iter()
            .filter(|p| p.status == PublishStatus::Published)
            .count(),
        unread_messages: messages
            .iter()
            .filter(|m| m.status == MessageStatus::Unread)
            .count(),
        week_views: page_views.iter().map(|stat| stat.views).sum(),
    };

    let mut recent_messages = messages;
    recent_messages.sort_by(|a, b| b.date.cmp(&a.date));
    recent_messages.truncate(3);

    DashboardTemplate {
        chrome: chrome(&state, &session, "/", &toast_query),
        metrics,
        recent_messages,
        page_views,
    }
}
