//! Reference parser that keeps every component exactly as written.
//!
//! The `url` crate only models absolute URLs and normalizes what it parses
//! (an absent path becomes `/`). Classification needs the raw shape of the
//! reference, so this module splits the string into scheme, authority, path,
//! query and fragment without rewriting any of them.

use crate::error::UrlUtilError;
use crate::types::UrlRef;

/// Split a reference string into a [`UrlRef`].
pub fn parse_reference(input: &str) -> Result<UrlRef, UrlUtilError> {
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlUtilError::InvalidUrl(
            "invalid control character in URL".to_string(),
        ));
    }

    let mut url = UrlRef::default();

    let rest = match input.split_once('#') {
        Some((before, fragment)) => {
            url.fragment = fragment.to_string();
            before
        }
        None => input,
    };

    let (scheme, rest) = split_scheme(rest)?;
    url.scheme = scheme.to_ascii_lowercase();

    let rest = match rest.split_once('?') {
        Some((before, query)) => {
            url.query = query.to_string();
            before
        }
        None => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            let authority = &after[..end];

            let host = match authority.rsplit_once('@') {
                Some((userinfo, host)) => {
                    url.userinfo = userinfo.to_string();
                    host
                }
                None => authority,
            };
            validate_port(host)?;
            url.host = host.to_string();

            &after[end..]
        }
        None => rest,
    };
    url.path = path.to_string();

    Ok(url)
}

/// Split off a leading `scheme:` if the input starts with one.
fn split_scheme(input: &str) -> Result<(&str, &str), UrlUtilError> {
    for (i, c) in input.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => {
                return Err(UrlUtilError::InvalidUrl(
                    "missing protocol scheme".to_string(),
                ));
            }
            ':' => return Ok((&input[..i], &input[i + 1..])),
            _ => return Ok(("", input)),
        }
    }

    Ok(("", input))
}

/// Reject a `:port` suffix that is not purely numeric.
fn validate_port(host: &str) -> Result<(), UrlUtilError> {
    // Colons inside an IPv6 literal are not port separators
    let tail = match host.rfind(']') {
        Some(i) => &host[i + 1..],
        None => host,
    };

    if let Some(i) = tail.rfind(':') {
        let port = &tail[i + 1..];
        if !port.chars().all(|c| c.is_ascii_digit()) {
            return Err(UrlUtilError::InvalidUrl(format!("invalid port {:?}", port)));
        }
    }

    Ok(())
}
