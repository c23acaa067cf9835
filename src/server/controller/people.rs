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
        people::{CreatePeopleDto, PeopleDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::people::PeopleService,
    },
};

/// OpenAPI tag grouping the character catalog routes
pub static PEOPLE_TAG: &str = "people";

const NOT_FOUND: &str = "Character not found";

/// List every character ordered by ID
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people_service = PeopleService::new(&state.db);

    let people = people_service.get_all_people().await?;

    Ok(Json(people))
}

/// Create a new character
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePeopleDto,
    responses(
        (status = 200, description = "Success when creating a character", body = PeopleDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<CreatePeopleDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(person) = body?;
    let people_service = PeopleService::new(&state.db);

    let person = people_service.create_person(person).await?;

    Ok(Json(person))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Success when retrieving the character", body = PeopleDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let people_service = PeopleService::new(&state.db);

    let person = people_service
        .get_person(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    Ok(Json(person))
}

/// Delete a character along with the favorites referencing it
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character deleted", body = String),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let people_service = PeopleService::new(&state.db);

    if !people_service.delete_person(id).await? {
        return Err(ApiError::not_found(NOT_FOUND).into());
    }

    Ok(Json("Character successfully deleted"))
}
