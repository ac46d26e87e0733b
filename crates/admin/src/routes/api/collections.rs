//! Generic JSON CRUD over every collection kind.
//!
//! The collection is addressed by its slug; records are validated against
//! the collection's schema at the store boundary, so a POST with the wrong
//! shape fails with 400 instead of polluting the blob.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;

use folio_core::{
    CollectionKind, ContentRecord, EducationEntry, ExperienceEntry, ItemId, MediaAsset, Message,
    PageViewStat, Project, SiteSettings, SkillCategory, UserRecord,
};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::store::ContentStore;

/// Run a generic store operation against the concrete record type of a kind.
macro_rules! dispatch_kind {
    ($kind:expr, $call:ident ( $($args:expr),* )) => {
        match $kind {
            CollectionKind::Projects => $call::<Project>($($args),*),
            CollectionKind::Skills => $call::<SkillCategory>($($args),*),
            CollectionKind::Experience => $call::<ExperienceEntry>($($args),*),
            CollectionKind::Education => $call::<EducationEntry>($($args),*),
            CollectionKind::Messages => $call::<Message>($($args),*),
            CollectionKind::Media => $call::<MediaAsset>($($args),*),
            CollectionKind::Users => $call::<UserRecord>($($args),*),
            CollectionKind::PageViews => $call::<PageViewStat>($($args),*),
        }
    };
}

fn resolve_kind(slug: &str) -> Result<CollectionKind> {
    CollectionKind::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("unknown collection: {slug}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::BadRequest(format!("serialization failed: {e}")))
}

fn list_records<R: ContentRecord>(store: &ContentStore) -> Result<Value> {
    to_json(&store.get::<R>())
}

fn create_record<R: ContentRecord>(store: &ContentStore, body: Value) -> Result<Value> {
    let record: R = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid record: {e}")))?;
    let stored = store.add(record)?;
    to_json(&stored)
}

fn update_record<R: ContentRecord>(
    store: &ContentStore,
    id: ItemId,
    patch: &Value,
) -> Result<Value> {
    let updated = store
        .update::<R>(id, patch)?
        .ok_or_else(|| AppError::NotFound(format!("no record with id {id}")))?;
    to_json(&updated)
}

fn remove_record<R: ContentRecord>(store: &ContentStore, id: ItemId) -> Result<()> {
    store.remove::<R>(id)?;
    Ok(())
}

/// List a collection.
///
/// GET /api/collections/{kind}
#[instrument(skip(state))]
pub async fn list(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Value>> {
    let kind = resolve_kind(&kind)?;
    let items = dispatch_kind!(kind, list_records(state.store()))?;
    Ok(Json(items))
}

/// Create a record; the store assigns the id.
///
/// POST /api/collections/{kind}
#[instrument(skip(state, body))]
pub async fn create(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let kind = resolve_kind(&kind)?;
    let stored = dispatch_kind!(kind, create_record(state.store(), body))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Shallow-patch a record.
///
/// PUT /api/collections/{kind}/{id}
#[instrument(skip(state, patch))]
pub async fn update(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>> {
    let kind = resolve_kind(&kind)?;
    let updated = dispatch_kind!(kind, update_record(state.store(), ItemId::new(id), &patch))?;
    Ok(Json(updated))
}

/// Delete a record; absent ids are already gone.
///
/// DELETE /api/collections/{kind}/{id}
#[instrument(skip(state))]
pub async fn remove(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i64)>,
) -> Result<StatusCode> {
    let kind = resolve_kind(&kind)?;
    dispatch_kind!(kind, remove_record(state.store(), ItemId::new(id)))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Read the settings record.
///
/// GET /api/settings
#[instrument(skip(state))]
pub async fn get_settings(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<SiteSettings> {
    Json(state.store().settings())
}

/// Replace the settings record.
///
/// PUT /api/settings
#[instrument(skip(state, settings))]
pub async fn put_settings(
    RequireAdminAuth(_session): RequireAdminAuth,
    State(state): State<AppState>,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>> {
    state.store().set_settings(&settings)?;
    Ok(Json(settings))
}
