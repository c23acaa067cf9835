use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::{
        api::ErrorDto,
        starship::{CreateStarshipDto, StarshipDto},
    },
    server::controller::starship::{create_starship, delete_starship, get_starship, get_starships},
};

use super::*;

#[tokio::test]
async fn creates_and_lists_starship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = create_starship(
        State(test.to_app_state()),
        Ok(Json(CreateStarshipDto {
            name: "Executor".to_string(),
            model: "Executor-class star dreadnought".to_string(),
            passengers: "38000".to_string(),
            length: "19000".to_string(),
            max_atmosphering_speed: "n/a".to_string(),
            cargo_capacity: "250000000".to_string(),
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: StarshipDto = json_body(resp).await;

    let resp = get_starships(State(test.to_app_state()))
        .await
        .into_response();
    let body: Vec<StarshipDto> = json_body(resp).await;
    assert_eq!(body, vec![created]);

    Ok(())
}

#[tokio::test]
async fn fails_to_get_nonexistent_starship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_starship(State(test.to_app_state()), Ok(Path(3)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.message, "Starship not found");

    Ok(())
}

#[tokio::test]
async fn deletes_starship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_starship("TIE Advanced x1")
        .build()
        .await?;

    let resp = delete_starship(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = json_body(resp).await;
    assert_eq!(body, "Starship successfully deleted");

    Ok(())
}
