use super::*;

/// Expect the sitemap to list the documented paths in sorted order
#[tokio::test]
async fn lists_api_paths() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(&test, Method::GET, "/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let paths: Vec<String> = json_body(resp).await;
    assert!(paths.contains(&"/people".to_string()));
    assert!(paths.contains(&"/user/{id}/favorites/{kind}/{target_id}".to_string()));
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(&test, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert_eq!(doc["info"]["title"], "Holonet");

    Ok(())
}
