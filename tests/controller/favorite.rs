use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteDto, FavoriteKind},
    },
    server::controller::favorite::{add_favorite, get_user_favorites, remove_favorite},
};

use super::*;

/// Expect 200 with the confirmation message naming the kind of record
#[tokio::test]
async fn adds_favorites_of_each_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_person("Yoda")
        .with_mock_planet("Dagobah")
        .with_mock_starship("X-wing")
        .build()
        .await?;

    let cases = [
        (FavoriteKind::People, "Character added to favorites successfully"),
        (FavoriteKind::Planets, "Planet added to favorites successfully"),
        (FavoriteKind::Starships, "Starship added to favorites successfully"),
    ];

    for (kind, expected) in cases {
        let resp = add_favorite(State(test.to_app_state()), Ok(Path((1, kind, 1))))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: String = json_body(resp).await;
        assert_eq!(body, expected);
    }

    let resp = get_user_favorites(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    let favorites: Vec<FavoriteDto> = json_body(resp).await;
    assert_eq!(favorites.len(), 3);

    Ok(())
}

/// Expect 400 with the duplicate message when favoriting the same planet twice
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let first = add_favorite(
        State(test.to_app_state()),
        Ok(Path((1, FavoriteKind::Planets, 1))),
    )
    .await
    .into_response();
    let second = add_favorite(
        State(test.to_app_state()),
        Ok(Path((1, FavoriteKind::Planets, 1))),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(second).await;
    assert_eq!(body.message, "The planet is already on the favorites list");

    Ok(())
}

/// Expect 404 when the favorited record does not exist
#[tokio::test]
async fn fails_for_nonexistent_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Ok(Path((1, FavoriteKind::Starships, 9))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.message, "Starship not found");

    Ok(())
}

#[tokio::test]
async fn removes_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_user("luke").await?;
    let person_model = test.catalog().insert_person("Ben Kenobi").await?;
    test.favorite()
        .insert_person_favorite(user_model.id, person_model.id)
        .await?;

    let resp = remove_favorite(
        State(test.to_app_state()),
        Ok(Path((user_model.id, FavoriteKind::People, person_model.id))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = json_body(resp).await;
    assert_eq!(body, "Favorite successfully deleted");

    Ok(())
}

/// Expect 404 when removing a favorite that was never added
#[tokio::test]
async fn fails_to_remove_nonexistent_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = remove_favorite(
        State(test.to_app_state()),
        Ok(Path((1, FavoriteKind::People, 1))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.message, "Favorite not found");

    Ok(())
}

/// Expect 404 when listing favorites of a user that does not exist
#[tokio::test]
async fn fails_to_list_favorites_of_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_user_favorites(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.message, "User not found");

    Ok(())
}
