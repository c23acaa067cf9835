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
        starship::{CreateStarshipDto, StarshipDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::starship::StarshipService,
    },
};

/// OpenAPI tag grouping the starship catalog routes
pub static STARSHIP_TAG: &str = "starships";

const NOT_FOUND: &str = "Starship not found";

/// List every starship ordered by ID
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "Success when retrieving starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starship_service = StarshipService::new(&state.db);

    let starships = starship_service.get_all_starships().await?;

    Ok(Json(starships))
}

/// Create a new starship
#[utoipa::path(
    post,
    path = "/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 200, description = "Success when creating a starship", body = StarshipDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    body: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(starship) = body?;
    let starship_service = StarshipService::new(&state.db);

    let starship = starship_service.create_starship(starship).await?;

    Ok(Json(starship))
}

/// Get a starship by ID
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "ID of the starship")),
    responses(
        (status = 200, description = "Success when retrieving the starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let starship_service = StarshipService::new(&state.db);

    let starship = starship_service
        .get_starship(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    Ok(Json(starship))
}

/// Delete a starship along with the favorites referencing it
#[utoipa::path(
    delete,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "ID of the starship")),
    responses(
        (status = 200, description = "Starship deleted", body = String),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let starship_service = StarshipService::new(&state.db);

    if !starship_service.delete_starship(id).await? {
        return Err(ApiError::not_found(NOT_FOUND).into());
    }

    Ok(Json("Starship successfully deleted"))
}
