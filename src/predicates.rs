//! Shape checks on a parsed reference: relative vs absolute, and whether a
//! link looks like a bare site, a home page, or something deeper.

use crate::types::UrlRef;

/// True when the reference has neither a scheme nor a host.
///
/// e.g.: `/news/article/29191.html`
pub fn is_relative(url: &UrlRef) -> bool {
    url.host.is_empty() && url.scheme.is_empty()
}

/// True when the reference has both a scheme and a host.
///
/// e.g.: `http://www.example.com/news.html`
///
/// A protocol-relative reference such as `//example.com` is neither absolute
/// nor relative.
pub fn is_absolute(url: &UrlRef) -> bool {
    !url.scheme.is_empty() && !url.host.is_empty()
}

/// True when the reference has no query string and no fragment.
pub fn is_empty_query(url: &UrlRef) -> bool {
    url.query.is_empty() && url.fragment.is_empty()
}

/// True when the path is absent. A root path `/` is not empty.
pub fn is_empty_path(url: &UrlRef) -> bool {
    url.path.is_empty()
}

/// True for a bare `scheme://host` reference with nothing after the host.
pub fn is_plain(url: &UrlRef) -> bool {
    is_empty_path(url) && is_empty_query(url)
}

/// Negation of [`is_plain`].
pub fn is_not_plain(url: &UrlRef) -> bool {
    !is_plain(url)
}

/// True when the reference is exactly the site root, `/`, with no query and
/// no fragment.
pub fn is_home_page(url: &UrlRef) -> bool {
    is_empty_query(url) && url.path == "/"
}
