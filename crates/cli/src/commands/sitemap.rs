//! Write sitemap.xml and robots.txt into a deploy directory.

use std::path::Path;

use tracing::info;

use folio_site::seo;

use super::CommandError;

/// Generate the artifacts.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or written.
pub fn run(base_url: &str, out_dir: &str) -> Result<(), CommandError> {
    let out = Path::new(out_dir);
    std::fs::create_dir_all(out)?;

    let sitemap = seo::sitemap_xml(base_url, chrono::Utc::now());
    let sitemap_path = out.join("sitemap.xml");
    std::fs::write(&sitemap_path, &sitemap)?;
    info!(path = %sitemap_path.display(), "sitemap.xml generated");

    let robots = seo::robots_txt(base_url);
    let robots_path = out.join("robots.txt");
    std::fs::write(&robots_path, &robots)?;
    info!(path = %robots_path.display(), "robots.txt generated");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        run("https://vc.example", out.to_str().unwrap()).unwrap();

        let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://vc.example/contact</loc>"));

        let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://vc.example/sitemap.xml"));
    }
}
