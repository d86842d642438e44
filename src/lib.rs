pub mod catalog;
pub mod email;
pub mod engine;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

use crate::{
    services::{contact::ContactService, quiz::QuizService},
    store::SessionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub quiz: QuizService,
    pub contact: ContactService,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
