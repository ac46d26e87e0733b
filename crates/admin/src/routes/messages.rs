//! Inbox pages for contact messages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use serde_json::json;
use tracing::instrument;

use folio_core::{ItemId, Message, MessageStatus};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::{Chrome, chrome, redirect_with_toast};
use crate::state::AppState;
use crate::ui::{Toast, ToastQuery};

/// Inbox template.
#[derive(Template, WebTemplate)]
#[template(path = "messages.html")]
pub struct MessagesTemplate {
    pub chrome: Chrome,
    pub messages: Vec<Message>,
    pub unread: usize,
}

/// Render the inbox, newest first.
///
/// GET /messages
#[instrument(skip(state, toast_query))]
pub async fn index(
    RequireAdminAuth(session): RequireAdminAuth,
    State(state): State<AppState>,
    Query(toast_query): Query<ToastQuery>,
) -> MessagesTemplate {
    let mut messages = state.store().get::<Message>();
    messages.sort_by(|a, b| b.date.cmp(&a.date));
    let unread = messages
        .iter()
        .filter(|m| m.status == MessageStatus::Unread)
        .count();

    MessagesTemplate {
        chrome: chrome(&state, &session, "/messages", &toast_query),
        messages,
        unread,
    }
}

/// Mark a message read.
///
/// POST /messages/{id}/read
#[instrument(skip(state))]
pub async fn mark_read(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    let updated = state
        .store()
        .update::<Message>(ItemId::new(id), &json!({ "status": "read" }))?;

    let toast = match updated {
        Some(_) => Toast::info("Message marked as read"),
        None => Toast::error(format!("Message {id} no longer exists")),
    };
    Ok(redirect_with_toast("/messages", &toast))
}

/// Delete a message.
///
/// POST /messages/{id}/delete
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.store().remove::<Message>(ItemId::new(id))?;
    tracing::info!(id, "Message deleted");

    Ok(redirect_with_toast(
        "/messages",
        &Toast::success("Message deleted"),
    ))
}
