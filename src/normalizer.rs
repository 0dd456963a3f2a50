//! Path and query normalization.

use crate::domain::{add_www, normalize_domain};
use crate::error::UrlUtilError;
use crate::types::UrlRef;

/// Clear path, query and fragment, leaving `scheme://host`.
pub fn strip_path_query_fragment(mut url: UrlRef) -> UrlRef {
    url.path.clear();
    url.query.clear();
    url.fragment.clear();
    url
}

/// Clear query and fragment. The path is kept.
pub fn strip_query_fragment(mut url: UrlRef) -> UrlRef {
    url.query.clear();
    url.fragment.clear();
    url
}

/// Return the path cut down to its first `depth` segments.
///
/// The path is split on `/`. The empty piece in front of a leading `/` is
/// not counted as a segment but is always kept, so depth 0 gives `""` and
/// depth 1 gives the first directory with its leading slash.
///
/// # Examples
///
/// ```
/// use urlutils::{split_path, UrlRef};
///
/// let u = UrlRef::parse("http://www.example.com/section/here").unwrap();
/// assert_eq!(split_path(&u, 1).unwrap(), "/section");
/// assert_eq!(split_path(&u, 2).unwrap(), "/section/here");
/// ```
///
/// # Errors
///
/// - [`UrlUtilError::PathMissing`] when the path is empty.
/// - [`UrlUtilError::PathPartsEmpty`] when the path contains no `/`.
/// - [`UrlUtilError::PathDepthOutOfRange`] when `depth` is negative or
///   larger than the number of segments.
pub fn split_path(url: &UrlRef, depth: isize) -> Result<String, UrlUtilError> {
    if url.path.is_empty() {
        return Err(UrlUtilError::PathMissing);
    }

    let parts: Vec<&str> = url.path.split('/').collect();
    let len_parts = parts.len() - 1;
    if len_parts == 0 {
        return Err(UrlUtilError::PathPartsEmpty);
    }

    let take = usize::try_from(depth)
        .ok()
        .filter(|&d| d <= len_parts)
        .ok_or(UrlUtilError::PathDepthOutOfRange {
            depth,
            max: len_parts,
        })?;

    Ok(parts[..=take].join("/"))
}

/// Reduce a reference to `http://[www.]domain.tld`.
///
/// Applies, in order: strip path/query/fragment, add `www.`, force the
/// scheme to `http`, collapse the host to its registrable domain. The input
/// is consumed, so a failed normalization leaves no half-rewritten value
/// behind.
///
/// # Examples
///
/// ```
/// use urlutils::{normalize_url, UrlRef};
///
/// let u = UrlRef::parse("https://blog.example.com/2024/01/post?ref=rss#c").unwrap();
/// assert_eq!(normalize_url(u).unwrap().to_string(), "http://www.example.com");
/// ```
pub fn normalize_url(url: UrlRef) -> Result<UrlRef, UrlUtilError> {
    let mut url = add_www(strip_path_query_fragment(url));
    url.scheme = "http".to_string();
    normalize_domain(url)
}
