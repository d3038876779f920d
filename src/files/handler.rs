use crate::config::StaticFilesConfig;
use crate::files::resolver::{self, PathError, Resolved};
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Serves files from the configured web root.
///
/// Handling never fails: every error condition maps to an error-page
/// response, so the connection always gets an answer.
#[derive(Debug, Clone)]
pub struct FileHandler {
    cfg: StaticFilesConfig,
}

impl FileHandler {
    pub fn new(cfg: StaticFilesConfig) -> Self {
        Self { cfg }
    }

    pub async fn handle(&self, req: &Request) -> Response {
        if req.method != Method::GET {
            tracing::info!(method = ?req.method, path = %req.path, status = 405, "Method not allowed");
            return Response::error_page(StatusCode::MethodNotAllowed);
        }

        let normalized = match resolver::normalize(&req.path, &self.cfg.index) {
            Ok(p) => p,
            Err(e) => return self.reject(&req.path, e),
        };

        let target = match resolver::resolve(&self.cfg.root, &normalized, &self.cfg.not_found).await
        {
            Ok(t) => t,
            Err(e) => return self.reject(&req.path, e),
        };

        let response = self.serve(target).await;
        tracing::info!(path = %req.path, status = response.status.as_u16(), "Served request");
        response
    }

    async fn serve(&self, target: Resolved) -> Response {
        match tokio::fs::read(&target.path).await {
            Ok(body) => {
                let content_type = mime::content_type(&target.path);
                Response::file(target.status, content_type, body)
            }
            Err(err) => {
                tracing::warn!(file = %target.path.display(), error = %err, "Failed to read file");

                // The target may have vanished or lost read permission
                // since resolution; fall back to the not-found page, and if
                // that is unreadable too, synthesize a body.
                let page = self.cfg.root.join(&self.cfg.not_found);
                if target.path != page {
                    if let Ok(body) = tokio::fs::read(&page).await {
                        return Response::file(
                            StatusCode::NotFound,
                            mime::content_type(&page),
                            body,
                        );
                    }
                }
                Response::error_page(StatusCode::NotFound)
            }
        }
    }

    fn reject(&self, path: &str, err: PathError) -> Response {
        let status = match err {
            PathError::Forbidden => StatusCode::Forbidden,
            PathError::BadEncoding => StatusCode::BadRequest,
        };
        tracing::warn!(path = %path, status = status.as_u16(), "Rejected request path");
        Response::error_page(status)
    }
}
