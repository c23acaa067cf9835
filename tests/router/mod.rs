//! Full HTTP round trips through the application router.
//!
//! Requests are sent with `tower::ServiceExt::oneshot` against the router returned by
//! `holonet::server::router::app`, exercising extraction, routing & error rendering together.

mod catalog;
mod favorite;
mod sitemap;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use holonet::server::{model::app::AppState, router::app};
use holonet_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::json_body;

/// Sends a single request through a fresh router sharing the test database.
async fn send(test: &TestContext, method: Method, uri: &str, body: Option<&str>) -> Response {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    app(test.to_app_state::<AppState>())
        .oneshot(request)
        .await
        .expect("Router failed to respond")
}
