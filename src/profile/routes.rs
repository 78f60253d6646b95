// src/profile/routes.rs

use axum::{routing::get, Router};

use super::handlers::{dispatch_get, dispatch_post, reject_method};

pub fn profile_routes() -> Router {
    Router::new().route(
        "/api/profile",
        get(dispatch_get)
            .post(dispatch_post)
            .fallback(reject_method),
    )
}
