//! Host-level operations: comparing, prefixing, collapsing and reversing
//! domains.
//!
//! Registrable domains are found with a plain two-label rule, so multi-label
//! public suffixes such as `co.uk` collapse to the suffix itself
//! (`www.bbc.co.uk` becomes `www.co.uk`).

use crate::error::UrlUtilError;
use crate::types::UrlRef;

const WWW_PREFIX: &str = "www.";

/// Exact host comparison. No normalization is applied.
pub fn same_domain(a: &UrlRef, b: &UrlRef) -> bool {
    a.host == b.host
}

/// Prefix the host with `www.` unless it already starts with it.
///
/// A reference without a host is returned unchanged.
///
/// # Examples
///
/// ```
/// use urlutils::{add_www, UrlRef};
///
/// let u = add_www(UrlRef::parse("http://example.com/news").unwrap());
/// assert_eq!(u.to_string(), "http://www.example.com/news");
/// ```
pub fn add_www(mut url: UrlRef) -> UrlRef {
    if !url.host.is_empty() && !has_www_prefix(&url.host) {
        url.host.insert_str(0, WWW_PREFIX);
    }
    url
}

/// Set the scheme to `http` when it is missing.
pub fn add_http(mut url: UrlRef) -> UrlRef {
    if url.scheme.is_empty() {
        url.scheme = "http".to_string();
    }
    url
}

/// Collapse the host to its last two labels, keeping a leading `www.`.
///
/// # Examples
///
/// ```
/// use urlutils::{normalize_domain, UrlRef};
///
/// let u = UrlRef::parse("http://www.sub.sub.example.com").unwrap();
/// assert_eq!(normalize_domain(u).unwrap().host, "www.example.com");
/// ```
///
/// # Errors
///
/// [`UrlUtilError::HostMissing`] for an empty host and
/// [`UrlUtilError::HostMalformed`] for a single-label host.
pub fn normalize_domain(mut url: UrlRef) -> Result<UrlRef, UrlUtilError> {
    let labels = host_labels(&url.host)?;

    let prefix = if has_www_prefix(&url.host) { WWW_PREFIX } else { "" };
    let registrable = labels[labels.len() - 2..].join(".");

    url.host = format!("{}{}", prefix, registrable);
    Ok(url)
}

/// Reverse the host's labels for use as a sort key.
///
/// e.g.: `www.example.com` => `com.example.www`
pub fn reverse_domain(url: &UrlRef) -> Result<String, UrlUtilError> {
    host_labels(&url.host)?;
    Ok(reverse_labels(&url.host).join("."))
}

/// The labels of a dotted name, last label first.
pub fn reverse_labels(name: &str) -> Vec<&str> {
    name.rsplit('.').collect()
}

/// The host's last label. Not checked against any list of real TLDs, and a
/// `:port` suffix stays attached.
pub fn host_tld(url: &UrlRef) -> Result<String, UrlUtilError> {
    url.host
        .rsplit('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .ok_or(UrlUtilError::HostMalformed)
}

/// Split a host into at least two labels.
fn host_labels(host: &str) -> Result<Vec<&str>, UrlUtilError> {
    if host.is_empty() {
        return Err(UrlUtilError::HostMissing);
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return Err(UrlUtilError::HostMalformed);
    }

    Ok(labels)
}

fn has_www_prefix(host: &str) -> bool {
    host.get(..WWW_PREFIX.len())
        .map_or(false, |start| start.eq_ignore_ascii_case(WWW_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_host(host: &str) -> UrlRef {
        UrlRef {
            scheme: "http".to_string(),
            host: host.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_has_www_prefix() {
        assert!(has_www_prefix("www.example.com"));
        assert!(has_www_prefix("WWW.example.com"));
        assert!(!has_www_prefix("www"));
        assert!(!has_www_prefix("wwwexample.com"));
        assert!(!has_www_prefix("ünï.example.com"));
    }

    #[test]
    fn test_add_www_keeps_existing_prefix_case() {
        assert_eq!(add_www(with_host("WWW.example.com")).host, "WWW.example.com");
    }

    #[test]
    fn test_normalize_domain_prefix_is_lowercase() {
        let u = normalize_domain(with_host("WWW.a.example.com")).unwrap();
        assert_eq!(u.host, "www.example.com");
    }

    #[test]
    fn test_normalize_domain_two_label_www_host() {
        // the prefix is re-added even when "www" is one of the last two labels
        let u = normalize_domain(with_host("www.com")).unwrap();
        assert_eq!(u.host, "www.www.com");
        assert_eq!(normalize_domain(u.clone()).unwrap(), u);
    }

    #[test]
    fn test_host_labels_errors() {
        assert_eq!(host_labels(""), Err(UrlUtilError::HostMissing));
        assert_eq!(host_labels("localhost"), Err(UrlUtilError::HostMalformed));
        assert_eq!(host_labels("example.com").unwrap(), vec!["example", "com"]);
    }

    #[test]
    fn test_host_tld() {
        assert_eq!(host_tld(&with_host("www.example.dance")).unwrap(), "dance");
        assert_eq!(host_tld(&with_host("localhost")).unwrap(), "localhost");
        assert_eq!(host_tld(&with_host("")), Err(UrlUtilError::HostMalformed));
    }
}
