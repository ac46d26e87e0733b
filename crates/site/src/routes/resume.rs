//! Résumé page route handlers.
//!
//! The whole résumé renders as one page; the path only selects which section
//! is active and scrolled into view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use crate::content::ResumeContent;
use crate::filters;
use crate::nav::{RouteOutcome, Section, SectionTracker};
use crate::state::AppState;

/// A rendered navigation entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// The résumé page template.
#[derive(Template, WebTemplate)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {
    pub content: ResumeContent,
    pub nav: Vec<NavLink>,
    pub active_id: &'static str,
    /// Section id to scroll to after load; `None` for the root route.
    pub scroll_target: Option<&'static str>,
}

fn nav_links(active: Section) -> Vec<NavLink> {
    Section::ALL
        .iter()
        .map(|section| NavLink {
            id: section.id(),
            label: section.label(),
            href: section.path(),
            active: *section == active,
        })
        .collect()
}

fn render(state: &AppState, active: Section, scroll: bool) -> ResumeTemplate {
    ResumeTemplate {
        content: state.content().clone(),
        nav: nav_links(active),
        active_id: active.id(),
        scroll_target: scroll.then(|| active.id()),
    }
}

/// Render the résumé at the root route.
///
/// GET /
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut tracker = SectionTracker::new();
    match tracker.route_changed("/") {
        RouteOutcome::Show { active, scroll } => render(&state, active, scroll).into_response(),
        RouteOutcome::RedirectToDefault => Redirect::to("/").into_response(),
    }
}

/// Render the résumé scrolled to a section.
///
/// GET /{section}
///
/// Unknown sections redirect to the default route.
#[instrument(skip(state))]
pub async fn section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> impl IntoResponse {
    let mut tracker = SectionTracker::new();
    match tracker.route_changed(&format!("/{section}")) {
        RouteOutcome::Show { active, scroll } => render(&state, active, scroll).into_response(),
        RouteOutcome::RedirectToDefault => {
            tracing::debug!(%section, "Unknown section, redirecting to root");
            Redirect::to("/").into_response()
        }
    }
}

/// Redirect any unmatched path to the default route.
pub async fn fallback() -> Redirect {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_mark_single_active_entry() {
        let links = nav_links(Section::Projects);
        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active.first().map(|l| l.id), Some("projects"));
    }

    #[test]
    fn test_nav_links_hero_points_at_root() {
        let links = nav_links(Section::Hero);
        let hero = links.iter().find(|l| l.id == "hero").expect("hero link");
        assert_eq!(hero.href, "/");
    }
}
