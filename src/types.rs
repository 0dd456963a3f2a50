//! The parsed URL value every operation works on.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::UrlUtilError;

/// A URL reference split into its components.
///
/// Unlike [`url::Url`], a `UrlRef` can hold relative and protocol-relative
/// references, and keeps an absent path as an empty string rather than `/`.
/// Empty strings mean "not present" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlRef {
    /// Scheme without the trailing `:` (http, https, mailto)
    pub scheme: String,
    /// Raw `user[:password]` found before `@` in the authority
    pub userinfo: String,
    /// Host, including a `:port` suffix if one was given
    pub host: String,
    /// Path as written (`/news/1.html`, `docs/`, or empty)
    pub path: String,
    /// Query string without the leading `?`
    pub query: String,
    /// Fragment without the leading `#`
    pub fragment: String,
}

impl UrlRef {
    /// Parse a reference string into its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlutils::UrlRef;
    ///
    /// let u = UrlRef::parse("//cdn.example.com/app.js?v=2").unwrap();
    /// assert_eq!(u.scheme, "");
    /// assert_eq!(u.host, "cdn.example.com");
    /// assert_eq!(u.path, "/app.js");
    /// assert_eq!(u.query, "v=2");
    /// ```
    pub fn parse(input: &str) -> Result<Self, UrlUtilError> {
        crate::parser::parse_reference(input)
    }

    /// Convert into a [`url::Url`]. Only absolute references convert.
    pub fn to_url(&self) -> Result<Url, UrlUtilError> {
        Ok(Url::parse(&self.url_input()?)?)
    }

    /// Serialize for the `url` crate, which reads any run of slashes after a
    /// special scheme as the start of an authority.
    pub(crate) fn url_input(&self) -> Result<String, UrlUtilError> {
        let hostless = self.host.is_empty() && self.userinfo.is_empty();
        if !hostless || !self.path.starts_with("//") {
            return Ok(self.to_string());
        }

        if !self.scheme.is_empty() {
            return Err(UrlUtilError::InvalidUrl(format!(
                "path {:?} would be read as a host",
                self.path
            )));
        }

        // "/." keeps the path from being taken as an authority (RFC 3986 5.3)
        let guarded = UrlRef {
            path: format!("/.{}", self.path),
            ..self.clone()
        };
        Ok(guarded.to_string())
    }
}

impl FromStr for UrlRef {
    type Err = UrlUtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrlRef::parse(s)
    }
}

impl From<&Url> for UrlRef {
    fn from(url: &Url) -> Self {
        let mut userinfo = url.username().to_string();
        if let Some(password) = url.password() {
            userinfo.push(':');
            userinfo.push_str(password);
        }

        let mut host = url.host_str().unwrap_or("").to_string();
        if let Some(port) = url.port() {
            host.push(':');
            host.push_str(&port.to_string());
        }

        UrlRef {
            scheme: url.scheme().to_string(),
            userinfo,
            host,
            path: url.path().to_string(),
            query: url.query().unwrap_or("").to_string(),
            fragment: url.fragment().unwrap_or("").to_string(),
        }
    }
}

impl From<Url> for UrlRef {
    fn from(url: Url) -> Self {
        UrlRef::from(&url)
    }
}

impl fmt::Display for UrlRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        let has_authority = !self.host.is_empty() || !self.userinfo.is_empty();
        // An empty authority keeps a "//" path from reading back as a host
        if has_authority
            || (!self.scheme.is_empty() && self.path.starts_with('/'))
            || self.path.starts_with("//")
        {
            f.write_str("//")?;
            if !self.userinfo.is_empty() {
                write!(f, "{}@", self.userinfo)?;
            }
            f.write_str(&self.host)?;
        }

        if has_authority && !self.path.is_empty() && !self.path.starts_with('/') {
            f.write_str("/")?;
        } else if self.scheme.is_empty() && !has_authority {
            // "a:b" would read back as scheme "a"
            let first = self.path.split('/').next().unwrap_or("");
            if first.contains(':') {
                f.write_str("./")?;
            }
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }

        Ok(())
    }
}
