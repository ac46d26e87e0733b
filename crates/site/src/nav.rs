//! Section navigation: route matching and scroll-position tracking.
//!
//! The résumé is one page of ordered sections. Two inputs move the
//! highlighted ("active") section:
//!
//! - [`SectionTracker::route_changed`] - explicit navigation. A recognized
//!   path segment becomes the target section and yields a scroll-to effect;
//!   an unrecognized one yields a redirect to the default route.
//! - [`SectionTracker::viewport_scrolled`] - passive observation. The last
//!   section whose top edge has crossed a quarter of the viewport height
//!   becomes active, without touching the URL or scrolling.

use serde::{Deserialize, Serialize};

/// Fraction of the viewport height a section top must cross to count as
/// "reached" while scrolling.
const SCROLL_THRESHOLD: f64 = 0.25;

/// The ordered set of résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Certifications,
    Hobbies,
    Contact,
    Footer,
}

impl Section {
    /// All sections in display (and scroll-walk) order.
    pub const ALL: [Self; 10] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Certifications,
        Self::Hobbies,
        Self::Contact,
        Self::Footer,
    ];

    /// The default section, shown at the root route.
    pub const DEFAULT: Self = Self::Hero;

    /// The DOM/anchor id of this section.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Hobbies => "hobbies",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    /// Navigation label for this section.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Certifications => "Certifications",
            Self::Hobbies => "Hobbies",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    /// The URL path this section is addressed by (`/` for the hero).
    #[must_use]
    pub fn path(&self) -> String {
        if *self == Self::Hero {
            "/".to_string()
        } else {
            format!("/{}", self.id())
        }
    }

    /// Resolve a path segment to a section.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == segment)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Result of feeding a route change into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render with the given active section; when `scroll` is set the view
    /// should be scrolled to it (skipped silently if the target is not
    /// mounted).
    Show { active: Section, scroll: bool },
    /// Unrecognized segment: navigate to the default route instead.
    RedirectToDefault,
}

/// Tracks which section is active, from routing and from scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: Section,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// Start at the default section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Section::DEFAULT,
        }
    }

    /// The currently active section.
    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    /// Feed a route change.
    ///
    /// The root path activates the default section without scrolling; a
    /// recognized segment activates that section and asks for a scroll; an
    /// unrecognized segment leaves the active section untouched and asks for
    /// a redirect to the default route.
    pub fn route_changed(&mut self, path: &str) -> RouteOutcome {
        let segment = path.trim_matches('/');

        if segment.is_empty() {
            self.active = Section::DEFAULT;
            return RouteOutcome::Show {
                active: self.active,
                scroll: false,
            };
        }

        match Section::from_segment(segment) {
            Some(section) => {
                self.active = section;
                RouteOutcome::Show {
                    active: section,
                    scroll: true,
                }
            }
            None => RouteOutcome::RedirectToDefault,
        }
    }

    /// Feed a scroll observation.
    ///
    /// `offsets` holds the top edge (relative to the viewport top, in px) of
    /// every *mounted* section; unmounted sections are simply absent. Walks
    /// the ordered section list and activates the last one whose top has
    /// crossed [`SCROLL_THRESHOLD`] of the viewport height, defaulting to the
    /// first section at the top of the page. Never changes the URL.
    pub fn viewport_scrolled(
        &mut self,
        offsets: &[(Section, f64)],
        viewport_height: f64,
    ) -> Section {
        let threshold = viewport_height * SCROLL_THRESHOLD;
        let mut current = Section::DEFAULT;

        for section in Section::ALL {
            let Some(&(_, top)) = offsets.iter().find(|(s, _)| *s == section) else {
                continue;
            };
            if top - threshold <= 0.0 {
                current = section;
            }
        }

        self.active = current;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_activates_hero_without_scroll() {
        let mut tracker = SectionTracker::new();
        assert_eq!(
            tracker.route_changed("/"),
            RouteOutcome::Show {
                active: Section::Hero,
                scroll: false
            }
        );
        assert_eq!(tracker.active(), Section::Hero);
    }

    #[test]
    fn test_every_known_segment_routes_with_scroll() {
        let mut tracker = SectionTracker::new();
        for section in Section::ALL {
            if section == Section::Hero {
                continue;
            }
            let outcome = tracker.route_changed(&format!("/{}", section.id()));
            assert_eq!(
                outcome,
                RouteOutcome::Show {
                    active: section,
                    scroll: true
                }
            );
            assert_eq!(tracker.active(), section);
        }
    }

    #[test]
    fn test_unknown_segment_redirects_and_keeps_active() {
        let mut tracker = SectionTracker::new();
        tracker.route_changed("/projects");
        assert_eq!(tracker.route_changed("/resume"), RouteOutcome::RedirectToDefault);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_scroll_picks_last_section_past_threshold() {
        let mut tracker = SectionTracker::new();
        // Viewport 800px -> threshold 200px. About (top 150) has crossed it,
        // experience (top 600) has not.
        let offsets = [
            (Section::Hero, -400.0),
            (Section::About, 150.0),
            (Section::Experience, 600.0),
        ];
        assert_eq!(tracker.viewport_scrolled(&offsets, 800.0), Section::About);
    }

    #[test]
    fn test_scroll_at_page_top_falls_back_to_hero() {
        let mut tracker = SectionTracker::new();
        tracker.route_changed("/contact");
        let offsets = [(Section::Hero, 300.0), (Section::About, 900.0)];
        assert_eq!(tracker.viewport_scrolled(&offsets, 800.0), Section::Hero);
        assert_eq!(tracker.active(), Section::Hero);
    }

    #[test]
    fn test_scroll_skips_unmounted_sections() {
        let mut tracker = SectionTracker::new();
        // Projects is missing from the offsets (lazy-loaded, not mounted);
        // the walk continues past it.
        let offsets = [
            (Section::Hero, -2000.0),
            (Section::About, -1200.0),
            (Section::Skills, 100.0),
        ];
        assert_eq!(tracker.viewport_scrolled(&offsets, 800.0), Section::Skills);
    }

    #[test]
    fn test_section_paths() {
        assert_eq!(Section::Hero.path(), "/");
        assert_eq!(Section::Contact.path(), "/contact");
        assert_eq!(Section::from_segment("education"), Some(Section::Education));
        assert_eq!(Section::from_segment("blog"), None);
    }
}
