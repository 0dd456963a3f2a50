//! Static asset detection by file extension.

/// Extensions that mark a link as a static asset. Compared case-insensitively.
pub const ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpeg", ".jpg", ".gif", ".bmp", ".jsx", ".js", ".json", ".css", ".scss", ".sass",
    ".less", ".psd", ".pdf",
];

/// Check whether a link points at a static asset such as a stylesheet,
/// script, image or document.
///
/// The link must *end* with one of [`ASSET_EXTENSIONS`]; an extension that
/// only appears somewhere inside the link does not count.
///
/// # Examples
///
/// ```
/// use urlutils::is_asset;
///
/// assert!(is_asset("https://www.example.com/assets/site.CSS"));
/// assert!(!is_asset("https://www.example.io/assets/defaultcss"));
/// assert!(!is_asset("https://www.example.com/file.jsz"));
/// ```
pub fn is_asset(link: &str) -> bool {
    let link = link.as_bytes();
    ASSET_EXTENSIONS.iter().any(|ext| {
        link.len() >= ext.len()
            && link[link.len() - ext.len()..].eq_ignore_ascii_case(ext.as_bytes())
    })
}
