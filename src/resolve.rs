//! Reference resolution against a base URL.

use url::Url;

use crate::error::UrlUtilError;
use crate::types::UrlRef;

/// Resolve `reference` against `base` following RFC 3986 section 5.
///
/// Resolution is done by [`url::Url::join`], so the result comes back in the
/// `url` crate's normalized form: dot segments are removed and an absent path
/// becomes `/`.
///
/// # Examples
///
/// ```
/// use urlutils::{resolve_url, UrlRef};
///
/// let base = UrlRef::parse("http://www.example.com/news/index.html").unwrap();
/// let link = UrlRef::parse("../about.html?lang=en").unwrap();
///
/// let resolved = resolve_url(&base, &link).unwrap();
/// assert_eq!(resolved.to_string(), "http://www.example.com/about.html?lang=en");
/// ```
///
/// # Errors
///
/// [`UrlUtilError::InvalidUrl`] when `reference` has no scheme and `base` is
/// not an absolute URL.
pub fn resolve_url(base: &UrlRef, reference: &UrlRef) -> Result<UrlRef, UrlUtilError> {
    // A reference with its own scheme ignores the base entirely
    if !reference.scheme.is_empty() {
        return Ok(Url::parse(&reference.url_input()?)?.into());
    }

    let base = base.to_url()?;
    Ok(base.join(&reference.url_input()?)?.into())
}
