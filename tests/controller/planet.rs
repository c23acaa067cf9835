use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::controller::planet::{create_planet, delete_planet, get_planet, get_planets},
};

use super::*;

/// Expect 200 with an empty list rather than 404 for an empty table
#[tokio::test]
async fn lists_no_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_planets(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<PlanetDto> = json_body(resp).await;
    assert!(body.is_empty());

    Ok(())
}

#[tokio::test]
async fn creates_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = create_planet(
        State(test.to_app_state()),
        Ok(Json(CreatePlanetDto {
            name: "Bespin".to_string(),
            climate: "temperate".to_string(),
            population: "6000000".to_string(),
            diameter: "118000".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: PlanetDto = json_body(resp).await;
    assert_eq!(body.name, "Bespin");
    assert_eq!(body.diameter, "118000");

    Ok(())
}

#[tokio::test]
async fn gets_and_deletes_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Kashyyyk")
        .build()
        .await?;

    let resp = get_planet(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = delete_planet(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = json_body(resp).await;
    assert_eq!(body, "Planet successfully deleted");

    let resp = delete_planet(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
