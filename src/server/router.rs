//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. Handlers sharing a path are registered together.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap listing every documented path
/// - `GET, POST /user` - List & create users
/// - `GET, PUT, DELETE /user/{id}` - Read, update & delete a user
/// - `GET /user/{id}/favorites` - List the favorites of a user
/// - `POST, DELETE /user/{id}/favorites/{kind}/{target_id}` - Add & remove a favorite
/// - `GET, POST /people`, `GET, DELETE /people/{id}`
/// - `GET, POST /planets`, `GET, DELETE /planets/{id}`
/// - `GET, POST /starships`, `GET, DELETE /starships/{id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User account routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorite routes"),
        (name = controller::people::PEOPLE_TAG, description = "Character catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship catalog routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .routes(routes!(
            controller::people::get_people,
            controller::people::create_person
        ))
        .routes(routes!(
            controller::people::get_person,
            controller::people::delete_person
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::starship::get_starships,
            controller::starship::create_starship
        ))
        .routes(routes!(
            controller::starship::get_starship,
            controller::starship::delete_starship
        ))
        .split_for_parts();

    routes
        .merge(controller::sitemap::routes(&api))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application with state, CORS & request tracing applied.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
