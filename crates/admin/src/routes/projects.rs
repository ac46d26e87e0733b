//! Project management pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use folio_core::{ItemId, Project, PublishStatus};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::{Chrome, chrome, redirect_with_toast};
use crate::state::AppState;
use crate::ui::{ModalState, Toast, ToastQuery};

/// Query parameters for the project listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// Name of the modal to open on load (e.g. `new-project`).
    pub modal: Option<String>,
    pub toast: Option<String>,
    pub toast_kind: Option<String>,
}

impl ProjectsQuery {
    fn toast_query(&self) -> ToastQuery {
        ToastQuery {
            toast: self.toast.clone(),
            toast_kind: self.toast_kind.clone(),
        }
    }
}

/// Projects page template.
#[derive(Template, WebTemplate)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub chrome: Chrome,
    pub projects: Vec<Project>,
    pub modals: ModalState,
}

/// Project form fields, shared by create and update.
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    /// Comma-separated technology tags.
    #[serde(default)]
    pub tech: String,
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    pub date: String,
}

impl ProjectForm {
    fn parse_status(&self) -> Result<PublishStatus> {
        match self.status.as_str() {
            "Published" => Ok(PublishStatus::Published),
            "Draft" => Ok(PublishStatus::Draft),
            "Archived" => Ok(PublishStatus::Archived),
            other => Err(AppError::BadRequest(format!("unknown status: {other}"))),
        }
    }

    fn parse_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("invalid date: {}", self.date)))
    }

    fn tech_tags(&self) -> Vec<String> {
        self.tech
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Render the project listing.
///
/// GET /projects
#[instrument(skip(state, query))]
pub async fn index(
    RequireAdminAuth(session): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> ProjectsTemplate {
    let mut modals = ModalState::new();
    if let Some(modal) = &query.modal {
        modals.show(modal);
    }

    ProjectsTemplate {
        chrome: chrome(&state, &session, "/projects", &query.toast_query()),
        projects: state.store().get::<Project>(),
        modals,
    }
}

/// Create a project.
///
/// POST /projects
#[instrument(skip(state, form))]
pub async fn create(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Result<Redirect> {
    let project = Project {
        id: ItemId::default(),
        title: form.title.trim().to_string(),
        category: form.category.trim().to_string(),
        tech: form.tech_tags(),
        description: form.description.trim().to_string(),
        status: form.parse_status()?,
        featured: form.featured.is_some(),
        live_url: form.live_url.trim().to_string(),
        github_url: form.github_url.trim().to_string(),
        image: String::new(),
        date: form.parse_date()?,
        views: 0,
    };

    let stored = state.store().add(project)?;
    tracing::info!(id = %stored.id, title = %stored.title, "Project created");

    Ok(redirect_with_toast(
        "/projects",
        &Toast::success("Project created"),
    ))
}

/// Update a project.
///
/// POST /projects/{id}
#[instrument(skip(state, form))]
pub async fn update(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProjectForm>,
) -> Result<Redirect> {
    let patch = json!({
        "title": form.title.trim(),
        "category": form.category.trim(),
        "tech": form.tech_tags(),
        "description": form.description.trim(),
        "status": form.parse_status()?,
        "featured": form.featured.is_some(),
        "liveUrl": form.live_url.trim(),
        "githubUrl": form.github_url.trim(),
        "date": form.parse_date()?,
    });

    let updated = state.store().update::<Project>(ItemId::new(id), &patch)?;
    let toast = match updated {
        Some(project) => {
            tracing::info!(id = %project.id, "Project updated");
            Toast::success("Project updated")
        }
        None => Toast::error(format!("Project {id} no longer exists")),
    };

    Ok(redirect_with_toast("/projects", &toast))
}

/// Delete a project.
///
/// POST /projects/{id}/delete
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.store().remove::<Project>(ItemId::new(id))?;
    tracing::info!(id, "Project deleted");

    Ok(redirect_with_toast(
        "/projects",
        &Toast::success("Project deleted"),
    ))
}
