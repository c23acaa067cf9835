use holonet::model::{api::ErrorDto, favorite::FavoriteDto};

use super::*;

/// Expect the second identical add to be rejected with 400
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_person("Yoda")
        .build()
        .await?;

    let first = send(&test, Method::POST, "/user/1/favorites/people/1", None).await;
    let second = send(&test, Method::POST, "/user/1/favorites/people/1", None).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(second).await;
    assert_eq!(body.message, "The character is already on the favorites list");

    Ok(())
}

/// Expect favorites to be serialized with camelCase target keys
#[tokio::test]
async fn lists_favorites_with_target_keys() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = send(&test, Method::POST, "/user/1/favorites/planets/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, Method::GET, "/user/1/favorites", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<serde_json::Value> = json_body(resp).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["favoritePlanetId"], 1);
    assert_eq!(favorites[0]["favoritePersonId"], serde_json::Value::Null);

    Ok(())
}

/// Expect 404 when removing a favorite that does not exist
#[tokio::test]
async fn fails_to_remove_nonexistent_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = send(&test, Method::DELETE, "/user/1/favorites/starships/1", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect deleting a favorited planet to remove it from the favorites list
#[tokio::test]
async fn drops_favorite_when_target_deleted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    send(&test, Method::POST, "/user/1/favorites/planets/1", None).await;
    let resp = send(&test, Method::DELETE, "/planets/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, Method::GET, "/user/1/favorites", None).await;
    let favorites: Vec<FavoriteDto> = json_body(resp).await;
    assert!(favorites.is_empty());

    Ok(())
}

/// Expect the favorite envelope message when the user does not exist
#[tokio::test]
async fn fails_to_remove_favorite_of_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(&test, Method::DELETE, "/user/7/favorites/planets/1", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(
        body,
        ErrorDto {
            message: "Favorite not found".to_string(),
            status_code: 404,
        }
    );

    Ok(())
}

/// Expect 404 in the error envelope for an unknown favorite kind
#[tokio::test]
async fn fails_for_unknown_favorite_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = send(&test, Method::POST, "/user/1/favorites/vehicles/1", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.status_code, 404);

    Ok(())
}
