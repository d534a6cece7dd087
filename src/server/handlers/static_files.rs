//! Download and stylesheet handlers.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::assets;
use super::super::AppState;

/// Serve a downloadable asset from the assets directory.
pub async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(file) = resolve_asset(&state.settings.assets_dir, &path) else {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    let content = match tokio::fs::read(&file).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read asset {}: {}", file.display(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
        }
    };

    let mime = mime_guess::from_path(&file)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], content).into_response()
}

/// Serve the stylesheet.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Resolve a requested file inside the assets directory. Rejects absolute
/// paths, traversal components, and symlinks escaping the directory.
fn resolve_asset(assets_dir: &FsPath, requested: &str) -> Option<PathBuf> {
    if requested.contains("..") || requested.starts_with('/') {
        return None;
    }

    let root = assets_dir.canonicalize().ok()?;
    let file = root.join(requested).canonicalize().ok()?;
    file.starts_with(&root).then_some(file)
}
