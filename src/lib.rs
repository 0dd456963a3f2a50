//! urlutils - classify and normalize web URLs
//!
//! A small set of stateless functions for link handling in crawlers and
//! indexers: spotting static assets, telling relative links from absolute
//! ones, collapsing hosts to their registrable domain, building reverse-domain
//! sort keys, and trimming paths to a fixed depth.
//!
//! # Quick Start
//!
//! ```
//! use urlutils::{is_asset, is_absolute, normalize_url, reverse_domain, split_path, UrlRef};
//!
//! let link = UrlRef::parse("https://news.example.com/world/europe/story.html?ref=home")?;
//!
//! assert!(is_absolute(&link));
//! assert!(!is_asset(&link.to_string()));
//!
//! // Section of the site the link lives in
//! assert_eq!(split_path(&link, 1)?, "/world");
//!
//! // Index key
//! assert_eq!(reverse_domain(&link)?, "com.example.news");
//!
//! // Site root the link belongs to
//! let site = normalize_url(link)?;
//! assert_eq!(site.to_string(), "http://www.example.com");
//! # Ok::<(), urlutils::UrlUtilError>(())
//! ```
//!
//! # Working with `url::Url`
//!
//! [`UrlRef`] is a plain component struct that can also hold relative and
//! protocol-relative references. Convert from an already parsed
//! [`url::Url`] with `UrlRef::from(&url)` and back with [`UrlRef::to_url`].
//!
//! # Ownership
//!
//! Operations that rewrite a reference take it by value and hand it back, so
//! they chain without aliasing:
//!
//! ```
//! use urlutils::{add_http, add_www, strip_query_fragment, UrlRef};
//!
//! let u = UrlRef::parse("//example.com/page?utm_source=x")?;
//! let u = strip_query_fragment(add_http(add_www(u)));
//! assert_eq!(u.to_string(), "http://www.example.com/page");
//! # Ok::<(), urlutils::UrlUtilError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, UrlUtilError>`:
//!
//! - Missing or single-label hosts
//! - Missing paths, paths without segments, out-of-range split depths
//! - Reference strings that cannot be parsed

pub use asset::{is_asset, ASSET_EXTENSIONS};
pub use domain::{
    add_http, add_www, host_tld, normalize_domain, reverse_domain, reverse_labels, same_domain,
};
pub use error::UrlUtilError;
pub use normalizer::{normalize_url, split_path, strip_path_query_fragment, strip_query_fragment};
pub use predicates::{
    is_absolute, is_empty_path, is_empty_query, is_home_page, is_not_plain, is_plain, is_relative,
};
pub use resolve::resolve_url;
pub use types::UrlRef;

// Module declarations
pub mod asset;
pub mod domain;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod predicates;
pub mod resolve;
pub mod types;

// Command-line front end used by the `urlutils` binary
pub mod cli;
pub mod logging;
