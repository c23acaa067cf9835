use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteDto, FavoriteKind},
    },
    server::{
        error::Error,
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag grouping the user favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// List the favorites of a user
///
/// # Responses
/// - 200 (OK): The user's favorites, an empty list if there are none
/// - 404 (Not Found): The user does not exist
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok(Json(favorites))
}

/// Add a person, planet or starship to the favorites of a user
///
/// # Responses
/// - 200 (OK): Confirmation message naming the kind of record added
/// - 400 (Bad Request): The record is already a favorite of the user
/// - 404 (Not Found): The user or the record does not exist
#[utoipa::path(
    post,
    path = "/user/{id}/favorites/{kind}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the user"),
        ("kind" = FavoriteKind, Path, description = "Kind of record to favorite"),
        ("target_id" = i32, Path, description = "ID of the person, planet or starship"),
    ),
    responses(
        (status = 200, description = "Favorite added", body = String),
        (status = 400, description = "Already on the favorites list", body = ErrorDto),
        (status = 404, description = "User or record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    path: Result<Path<(i32, FavoriteKind, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, kind, target_id)) = path?;
    let favorite_service = FavoriteService::new(&state.db);
    let target = FavoriteTarget::new(kind, target_id);

    favorite_service.add_favorite(user_id, target).await?;

    Ok(Json(target.added_message()))
}

/// Remove a person, planet or starship from the favorites of a user
#[utoipa::path(
    delete,
    path = "/user/{id}/favorites/{kind}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the user"),
        ("kind" = FavoriteKind, Path, description = "Kind of record to remove"),
        ("target_id" = i32, Path, description = "ID of the person, planet or starship"),
    ),
    responses(
        (status = 200, description = "Favorite removed", body = String),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    path: Result<Path<(i32, FavoriteKind, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, kind, target_id)) = path?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite(user_id, FavoriteTarget::new(kind, target_id))
        .await?;

    Ok(Json("Favorite successfully deleted"))
}
