use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt as _;

use super::*;

fn router() -> Router {
    static_routes(&ServerConfig::default())
}

async fn get_status(uri: &str) -> (StatusCode, Option<String>) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (response.status(), content_type)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_status("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn planet_images_are_served_as_svg() {
    for planet in mission::catalog::PLANETS {
        let (status, content_type) = get_status(planet.image).await;
        assert_eq!(status, StatusCode::OK, "{}", planet.image);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    }
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let (status, _) = get_status("/assets/planets/vulcan.svg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
