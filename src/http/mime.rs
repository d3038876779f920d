use std::path::Path;

/// Content type for unknown or missing extensions.
pub const FALLBACK: &str = "application/octet-stream";

/// Extension → content-type table. Read-only; lookup is case-insensitive.
const TABLE: &[(&str, &str)] = &[
    ("html", "text/html; charset=UTF-8"),
    ("ico", "image/x-icon"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("css", "text/css"),
    ("js", "application/javascript"),
];

/// Determines the content type for a file from its extension.
///
/// # Example
///
/// ```
/// # use plinth::http::mime;
/// # use std::path::Path;
/// assert_eq!(mime::content_type(Path::new("logo.PNG")), "image/png");
/// assert_eq!(mime::content_type(Path::new("data.bin")), mime::FALLBACK);
/// ```
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK;
    };

    TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK)
}
