use holonet::model::{api::ErrorDto, people::PeopleDto, planet::PlanetDto};

use super::*;

/// Expect a posted person to be returned by a subsequent GET
#[tokio::test]
async fn creates_and_gets_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/people",
        Some(r#"{"name":"Luke","mass":"77","hair_color":"blond","birth_year":"19BBY","gender":"male"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, Method::GET, "/people/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let person: PeopleDto = json_body(resp).await;
    assert_eq!(
        person,
        PeopleDto {
            id: 1,
            name: "Luke".to_string(),
            mass: "77".to_string(),
            hair_color: Some("blond".to_string()),
            birth_year: "19BBY".to_string(),
            gender: Some("male".to_string()),
        }
    );

    Ok(())
}

/// Expect hair color & gender to be optional in the request body
#[tokio::test]
async fn creates_person_without_optional_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/people",
        Some(r#"{"name":"C-3PO","mass":"75","birth_year":"112BBY"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let person: serde_json::Value = json_body(resp).await;
    assert_eq!(person["hair_color"], serde_json::Value::Null);
    assert_eq!(person["gender"], serde_json::Value::Null);

    Ok(())
}

/// Expect 200 with `[]` for an empty table
#[tokio::test]
async fn lists_no_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(&test, Method::GET, "/planets", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = json_body(resp).await;
    assert!(planets.is_empty());

    Ok(())
}

/// Expect 400 with the error envelope when a required key is missing
#[tokio::test]
async fn fails_for_missing_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/planets",
        Some(r#"{"name":"Hoth","climate":"frozen","population":"unknown"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.status_code, 400);

    Ok(())
}

/// Expect 400 when the body is not valid JSON
#[tokio::test]
async fn fails_for_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = send(&test, Method::POST, "/starships", Some("{\"name\":")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 on GET after the starship is deleted
#[tokio::test]
async fn deletes_starship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_starship("Imperial shuttle")
        .build()
        .await?;

    let resp = send(&test, Method::DELETE, "/starships/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let message: String = json_body(resp).await;
    assert_eq!(message, "Starship successfully deleted");

    let resp = send(&test, Method::GET, "/starships/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
