//! Sitemap and robots directives for the public routes.
//!
//! The same builders back the HTTP handlers (`GET /sitemap.xml`,
//! `GET /robots.txt`) and the `folio-cli sitemap` command, which writes the
//! files into a deploy directory.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::state::AppState;

/// A public route entry in the sitemap.
#[derive(Debug, Clone, Copy)]
pub struct SitemapRoute {
    pub path: &'static str,
    pub priority: &'static str,
    pub changefreq: &'static str,
}

/// The indexable public routes. The footer is a scroll anchor, not a page,
/// and stays out of the index.
pub const PUBLIC_ROUTES: [SitemapRoute; 9] = [
    SitemapRoute {
        path: "",
        priority: "1.0",
        changefreq: "weekly",
    },
    SitemapRoute {
        path: "/about",
        priority: "0.9",
        changefreq: "monthly",
    },
    SitemapRoute {
        path: "/experience",
        priority: "0.9",
        changefreq: "monthly",
    },
    SitemapRoute {
        path: "/projects",
        priority: "0.8",
        changefreq: "monthly",
    },
    SitemapRoute {
        path: "/skills",
        priority: "0.8",
        changefreq: "monthly",
    },
    SitemapRoute {
        path: "/education",
        priority: "0.7",
        changefreq: "yearly",
    },
    SitemapRoute {
        path: "/certifications",
        priority: "0.7",
        changefreq: "monthly",
    },
    SitemapRoute {
        path: "/hobbies",
        priority: "0.6",
        changefreq: "yearly",
    },
    SitemapRoute {
        path: "/contact",
        priority: "0.9",
        changefreq: "monthly",
    },
];

/// Build the sitemap XML for the public routes.
#[must_use]
pub fn sitemap_xml(base_url: &str, last_modified: DateTime<Utc>) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = last_modified.to_rfc3339_opts(SecondsFormat::Secs, true);

    let urls = PUBLIC_ROUTES
        .iter()
        .map(|route| {
            format!(
                "  <url>\n    <loc>{base}{path}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
                 <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>",
                path = route.path,
                changefreq = route.changefreq,
                priority = route.priority,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}\n</urlset>\n"
    )
}

/// Build the robots directives, pointing crawlers at the sitemap.
#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /private/\n\nSitemap: {base}/sitemap.xml\n"
    )
}

/// Serve the sitemap.
///
/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let body = sitemap_xml(&state.config().base_url, Utc::now());
    ([(header::CONTENT_TYPE, "application/xml")], body)
}

/// Serve the robots directives.
///
/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let body = robots_txt(&state.config().base_url);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lastmod() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_sitemap_lists_every_public_route() {
        let xml = sitemap_xml("https://vc.example", lastmod());
        for route in PUBLIC_ROUTES {
            assert!(xml.contains(&format!("<loc>https://vc.example{}</loc>", route.path)));
            assert!(xml.contains(&format!("<priority>{}</priority>", route.priority)));
            assert!(xml.contains(&format!("<changefreq>{}</changefreq>", route.changefreq)));
        }
        assert_eq!(xml.matches("<url>").count(), 9);
        assert!(!xml.contains("/footer"));
    }

    #[test]
    fn test_sitemap_trims_trailing_slash() {
        let xml = sitemap_xml("https://vc.example/", lastmod());
        assert!(xml.contains("<loc>https://vc.example/about</loc>"));
        assert!(!xml.contains("example//about"));
    }

    #[test]
    fn test_robots_disallows_private_paths() {
        let robots = robots_txt("https://vc.example");
        assert!(robots.contains("Disallow: /api/"));
        assert!(robots.contains("Disallow: /private/"));
        assert!(robots.contains("Sitemap: https://vc.example/sitemap.xml"));
    }
}
