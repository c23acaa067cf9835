use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag grouping the planet catalog routes
pub static PLANET_TAG: &str = "planets";

const NOT_FOUND: &str = "Planet not found";

/// List every planet ordered by ID
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_all_planets().await?;

    Ok(Json(planets))
}

/// Create a new planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Success when creating a planet", body = PlanetDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(planet) = body?;
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service.create_planet(planet).await?;

    Ok(Json(planet))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service
        .get_planet(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    Ok(Json(planet))
}

/// Delete a planet along with the favorites referencing it
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = String),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let planet_service = PlanetService::new(&state.db);

    if !planet_service.delete_planet(id).await? {
        return Err(ApiError::not_found(NOT_FOUND).into());
    }

    Ok(Json("Planet successfully deleted"))
}
