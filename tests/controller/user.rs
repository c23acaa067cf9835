use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::user::{create_user, delete_user, get_user, get_users, update_user},
};

use super::*;

/// Expect 200 with the created user, the password is not part of the response
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(
        State(test.to_app_state()),
        Ok(Json(CreateUserDto {
            username: "rey".to_string(),
            email: "rey@jakku.net".to_string(),
            password: "bb8".to_string(),
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["username"], "rey");
    assert_eq!(body["email"], "rey@jakku.net");
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 400 with the error envelope when the username is already taken
#[tokio::test]
async fn fails_to_create_duplicate_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("rey")
        .build()
        .await?;

    let result = create_user(
        State(test.to_app_state()),
        Ok(Json(CreateUserDto {
            username: "rey".to_string(),
            email: "another@jakku.net".to_string(),
            password: "bb8".to_string(),
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.status_code, 400);

    Ok(())
}

/// Expect 200 with an empty list when no users exist
#[tokio::test]
async fn lists_no_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<UserDto> = json_body(resp).await;
    assert!(body.is_empty());

    Ok(())
}

#[tokio::test]
async fn gets_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_user("finn").await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(user_model.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserDto = json_body(resp).await;
    assert_eq!(body.id, user_model.id);
    assert_eq!(body.username, "finn");

    Ok(())
}

/// Expect 404 with the "User not found" message
#[tokio::test]
async fn fails_to_get_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(
        body,
        ErrorDto {
            message: "User not found".to_string(),
            status_code: 404,
        }
    );

    Ok(())
}

/// Expect only the email to change for an email-only update
#[tokio::test]
async fn updates_user_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_user("poe").await?;

    let resp = update_user(
        State(test.to_app_state()),
        Ok(Path(user_model.id)),
        Ok(Json(UpdateUserDto {
            email: Some("x@y.com".to_string()),
            ..Default::default()
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserDto = json_body(resp).await;
    assert_eq!(body.email, "x@y.com");
    assert_eq!(body.username, "poe");

    Ok(())
}

#[tokio::test]
async fn fails_to_update_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = update_user(
        State(test.to_app_state()),
        Ok(Path(1)),
        Ok(Json(UpdateUserDto::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the confirmation message on the first deletion & 404 on the second
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_user("bb8").await?;

    let resp = delete_user(State(test.to_app_state()), Ok(Path(user_model.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = json_body(resp).await;
    assert_eq!(body, "User successfully deleted");

    let resp = delete_user(State(test.to_app_state()), Ok(Path(user_model.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 with the generic message when the database tables are missing
#[tokio::test]
async fn fails_with_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.message, "Internal server error");

    Ok(())
}
