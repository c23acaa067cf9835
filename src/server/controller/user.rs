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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping the user account routes
pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all_users().await?;

    Ok(Json(users))
}

/// Create a new user
///
/// # Responses
/// - 200 (OK): The created user, the password is not included
/// - 400 (Bad Request): Malformed body, missing field, or email/username already taken
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Success when creating a user", body = UserDto),
        (status = 400, description = "Invalid body or duplicate email/username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(user) = body?;
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(user).await?;

    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let user_service = UserService::new(&state.db);

    let user = user_service
        .get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// Update the provided fields of a user
///
/// Fields missing from the body are left unchanged.
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Success when updating the user", body = UserDto),
        (status = 400, description = "Invalid body or duplicate email/username", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let Json(changes) = body?;
    let user_service = UserService::new(&state.db);

    let user = user_service
        .update_user(user_id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// Delete a user along with their favorites
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;
    let user_service = UserService::new(&state.db);

    if !user_service.delete_user(user_id).await? {
        return Err(ApiError::not_found("User not found").into());
    }

    Ok(Json("User successfully deleted"))
}
