//! Fragment path convention: `<origin>/<fragment_dir>/<id>.html`.

use crate::site_id::SiteId;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentUrlError {
    /// `data:`, `file:` and similar pages have no origin to fetch from.
    #[error("page URL {0} has no usable origin")]
    OpaqueOrigin(String),
    #[error("fragment URL: {0}")]
    Parse(#[from] url::ParseError),
}

/// Builds the fragment URL for `id` relative to the page's origin.
///
/// Only scheme, host and port of `page_url` survive; its path, query and
/// fragment are dropped. Empty segments in `fragment_dir` are ignored.
pub fn fragment_url(page_url: &Url, fragment_dir: &str, id: &SiteId) -> Result<Url, FragmentUrlError> {
    let origin = page_url.origin();
    if !origin.is_tuple() {
        return Err(FragmentUrlError::OpaqueOrigin(page_url.to_string()));
    }

    let mut path = String::from("/");
    for segment in fragment_dir.split('/').filter(|s| !s.is_empty()) {
        path.push_str(segment);
        path.push('/');
    }
    path.push_str(id.as_str());
    path.push_str(".html");

    let base = Url::parse(&origin.ascii_serialization())?;
    Ok(base.join(&path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SiteId {
        SiteId::parse(s).unwrap()
    }

    #[test]
    fn builds_sites_path_from_origin() {
        let page = Url::parse("https://me.example/blog/index.html?q=music#top").unwrap();
        let u = fragment_url(&page, "sites", &id("music")).unwrap();
        assert_eq!(u.as_str(), "https://me.example/sites/music.html");
    }

    #[test]
    fn keeps_port() {
        let page = Url::parse("http://127.0.0.1:8080/?q=home").unwrap();
        let u = fragment_url(&page, "sites", &id("home")).unwrap();
        assert_eq!(u.as_str(), "http://127.0.0.1:8080/sites/home.html");
    }

    #[test]
    fn nested_and_sloppy_fragment_dir() {
        let page = Url::parse("https://me.example/").unwrap();
        let u = fragment_url(&page, "/static//parts/", &id("about")).unwrap();
        assert_eq!(u.as_str(), "https://me.example/static/parts/about.html");
    }

    #[test]
    fn empty_fragment_dir_serves_from_root() {
        let page = Url::parse("https://me.example/x/y").unwrap();
        let u = fragment_url(&page, "", &id("about")).unwrap();
        assert_eq!(u.as_str(), "https://me.example/about.html");
    }

    #[test]
    fn opaque_origin_rejected() {
        let page = Url::parse("data:text/html,hello").unwrap();
        assert!(matches!(
            fragment_url(&page, "sites", &id("home")),
            Err(FragmentUrlError::OpaqueOrigin(_))
        ));
    }
}
