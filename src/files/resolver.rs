//! Request path normalization and web-root resolution.
//!
//! Untrusted request targets come in; safe, root-relative file paths come
//! out. Traversal is rejected twice: textually during normalization, and
//! by canonical-path containment during resolution.

use std::path::{Path, PathBuf};

use crate::http::response::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Path tries to escape the web root.
    Forbidden,
    /// Percent-escape that does not decode to valid UTF-8.
    BadEncoding,
}

/// What a request path resolved to: the file to serve and the status line
/// to serve it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub status: StatusCode,
}

/// Normalizes a raw request target into a root-relative file path.
///
/// Steps: strip the query string, percent-decode, substitute `index` for
/// `/`, strip the leading slash, then reject anything still containing a
/// `..` sequence or starting with a separator.
///
/// Decoding happens before the traversal check, so encoded dot segments
/// like `%2e%2e` are caught as well.
pub fn normalize(raw: &str, index: &str) -> Result<String, PathError> {
    let path = raw.split_once('?').map(|(p, _)| p).unwrap_or(raw);

    let path = urlencoding::decode(path).map_err(|_| PathError::BadEncoding)?;

    if path == "/" {
        return Ok(index.to_string());
    }

    let path = path.strip_prefix('/').unwrap_or(&path);

    if path.contains("..") || path.starts_with('/') || path.starts_with('\\') {
        return Err(PathError::Forbidden);
    }

    Ok(path.to_string())
}

/// Joins a normalized path onto the web root and decides what to serve.
///
/// A missing or non-regular target resolves to the `not_found` page with
/// status 404. An existing file must additionally stay inside the
/// canonicalized root; a symlink pointing outside it is Forbidden even
/// though the textual checks passed.
pub async fn resolve(
    root: &Path,
    normalized: &str,
    not_found: &str,
) -> Result<Resolved, PathError> {
    let candidate = root.join(normalized);

    match tokio::fs::metadata(&candidate).await {
        Ok(meta) if meta.is_file() => {
            let root_canon = tokio::fs::canonicalize(root)
                .await
                .map_err(|_| PathError::Forbidden)?;
            let file_canon = tokio::fs::canonicalize(&candidate)
                .await
                .map_err(|_| PathError::Forbidden)?;

            if !file_canon.starts_with(&root_canon) {
                return Err(PathError::Forbidden);
            }

            Ok(Resolved {
                path: candidate,
                status: StatusCode::Ok,
            })
        }
        _ => Ok(Resolved {
            path: root.join(not_found),
            status: StatusCode::NotFound,
        }),
    }
}
