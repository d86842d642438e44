use axum::{
    extract::Path,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use include_dir::{include_dir, Dir};

use crate::AppState;

static STATIC_DIR: Dir = include_dir!("static");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

async fn send_file(Path(path): Path<String>) -> impl IntoResponse {
    let Some(file) = STATIC_DIR.get_file(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let content_type = match file.path().extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "js" => "text/javascript",
        _ => "application/octet-stream",
    };

    (
        [
            (CONTENT_TYPE, content_type),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        file.contents(),
    )
        .into_response()
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(send_file))
}
