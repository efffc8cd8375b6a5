//! Static file serving module
//!
//! Resolves request paths against the serving root and loads file content,
//! with directory-traversal protection and per-request error mapping.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Index file looked up when a request resolves to a directory
const INDEX_FILE: &str = "index.html";

/// Per-request failure, mapped onto an HTTP status by the caller.
///
/// Every variant is contained within the failing request; none of them can
/// reach the accept loop.
#[derive(Debug)]
pub enum FileError {
    /// Path does not resolve to an existing file (404)
    NotFound,
    /// Path escapes the root or is not readable (403)
    Forbidden,
    /// Disk read failed for an existing, accessible file (500)
    Io(io::Error),
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Io(err),
        }
    }
}

/// Serve a request path from the root directory
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match load(state, ctx.path).await {
        Ok((content, content_type)) => {
            if ctx.access_log {
                logger::log_access(ctx.method, ctx.path, 200, content.len());
            }
            http::build_file_response(content, content_type, ctx.is_head)
        }
        Err(FileError::NotFound) => {
            if ctx.access_log {
                logger::log_access(ctx.method, ctx.path, 404, 0);
            }
            http::build_404_response()
        }
        Err(FileError::Forbidden) => {
            logger::log_warning(&format!("Forbidden path: {}", ctx.path));
            http::build_403_response()
        }
        Err(FileError::Io(e)) => {
            logger::log_error(&format!("Failed to read '{}': {e}", ctx.path));
            http::build_500_response()
        }
    }
}

/// Resolve a request path beneath the root and read the file.
///
/// Returns the file content together with its resolved Content-Type.
pub async fn load<'a>(state: &'a AppState, path: &str) -> Result<(Vec<u8>, &'a str), FileError> {
    let file_path = resolve(state.root(), path)?;
    let content = fs::read(&file_path).await.map_err(FileError::from)?;
    let content_type = state.content_types().content_type_for(&file_path);
    Ok((content, content_type))
}

/// Map a request path onto a filesystem path under `root`.
///
/// `..` components are rejected before touching the filesystem; the joined
/// path is then canonicalized and must still live beneath the canonical
/// root. Directory targets resolve to their index file when present.
fn resolve(root: &Path, path: &str) -> Result<PathBuf, FileError> {
    let relative = path.trim_start_matches('/');

    if Path::new(relative)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(FileError::Forbidden);
    }

    let joined = root.join(relative);
    let mut canonical = joined.canonicalize().map_err(FileError::from)?;

    // Symlinks may still point outside the root after canonicalization
    if !canonical.starts_with(root) {
        return Err(FileError::Forbidden);
    }

    if canonical.is_dir() {
        canonical.push(INDEX_FILE);
        if !canonical.is_file() {
            return Err(FileError::NotFound);
        }
    }

    Ok(canonical)
}
