use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;
use tower::ServiceExt;

use travel_recs_core::{DestinationRecord, TravelDataset};
use travel_recs_http::{AppState, create_router};
use travel_recs_service::{Catalog, RecommendationService};

fn app_with(catalog: Catalog) -> axum::Router {
    let service = Arc::new(RecommendationService::new(catalog));
    create_router(Arc::new(AppState::new(service)))
}

fn app() -> axum::Router {
    app_with(Catalog::Loaded(TravelDataset::from_records(vec![
        DestinationRecord::new(
            "Manali",
            "Solang Valley",
            "\u{20b9}5000-8000",
            "3-4",
            "Hill Station",
            "Himachal Pradesh",
        ),
        DestinationRecord::new("Goa Beach", "Baga, Calangute", "4000-7000", "3-5", "Beach", "Goa"),
        DestinationRecord::new("Agra", "Fatehpur Sikri", "free entry", "-1", "Heritage", "Uttar Pradesh"),
    ])))
}

async fn post_json(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::post("/get_recommendations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let res = app.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_manali_recommendation() {
    let (status, body) = post_json(app(), r#"{"destination": "manali", "people": "2"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "City": "Manali",
            "Nearby Tourist Places": "Solang Valley",
            "Overall Cost (INR)": "\u{20b9}8000",
            "Days": 4,
            "Type of Place": "Hill Station",
            "State": "Himachal Pradesh",
        })
    );
}

#[tokio::test]
async fn test_lookup_ignores_case_and_spacing() {
    for dest in ["goa   beach", " Goa Beach ", "GOA BEACH"] {
        let body = serde_json::json!({"destination": dest, "people": "3"}).to_string();
        let (status, json) = post_json(app(), &body).await;
        assert_eq!(status, StatusCode::OK, "lookup failed for {dest:?}");
        assert_eq!(json["City"], "Goa Beach");
        assert_eq!(json["Days"], 5);
    }
}

#[tokio::test]
async fn test_unparsable_cost_is_not_available() {
    let (status, json) = post_json(app(), r#"{"destination": "agra", "people": "1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Overall Cost (INR)"], "Not available");
    assert_eq!(json["Days"], 1);
}

#[tokio::test]
async fn test_missing_fields_are_bad_request() {
    let bodies = [
        r#"{"destination": "Manali", "people": ""}"#,
        r#"{"destination": "   ", "people": "2"}"#,
        r#"{"destination": "Manali"}"#,
        r#"{"people": "2"}"#,
        r#"{}"#,
    ];
    for body in bodies {
        let (status, json) = post_json(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json["error"], "Please provide both destination and number of people.");
    }
}

#[tokio::test]
async fn test_unknown_destination_echoes_input() {
    let (status, json) = post_json(app(), r#"{"destination": "  Atlantis  ", "people": "2"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Destination '  Atlantis  ' not found.");
}

#[tokio::test]
async fn test_unavailable_data_is_server_error() {
    let degraded = || app_with(Catalog::Unavailable { reason: "no such file".to_owned() });
    for body in [r#"{"destination": "Manali", "people": "2"}"#, r#"{}"#, "not json"] {
        let (status, json) = post_json(degraded(), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
        assert_eq!(json["error"], "Travel data is not available.");
    }

    let empty = app_with(Catalog::Loaded(TravelDataset::default()));
    let (status, json) = post_json(empty, r#"{"destination": "Manali", "people": "2"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Travel data is not available.");
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let (status, json) = post_json(app(), "{not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().starts_with("Internal Server Error: "));

    let bodies = [
        r#"{"destination": "Manali", "people": 2}"#,
        r#"{"destination": "Manali", "people": null}"#,
        r#"{"destination": null, "people": "2"}"#,
    ];
    for body in bodies {
        let (status, json) = post_json(app(), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
        assert!(json["error"].as_str().unwrap().starts_with("Internal Server Error: "));
    }
}

#[tokio::test]
async fn test_index_lists_sorted_destinations() {
    let (status, page) = get_text(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let agra = page.find(">Agra<").unwrap();
    let goa = page.find(">Goa Beach<").unwrap();
    let manali = page.find(">Manali<").unwrap();
    assert!(agra < goa && goa < manali);
}

#[tokio::test]
async fn test_destinations_endpoint() {
    let (status, body) = get_text(app(), "/api/destinations").await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(list, ["Agra", "Goa Beach", "Manali"]);

    let (_, body) = get_text(app_with(Catalog::Unavailable { reason: "x".to_owned() }), "/api/destinations").await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_readiness_reflects_catalog() {
    let (status, _) = get_text(app(), "/api/readiness").await;
    assert_eq!(status, StatusCode::OK);

    let degraded = app_with(Catalog::Unavailable { reason: "no such file".to_owned() });
    let (status, body) = get_text(degraded, "/api/readiness").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["message"], "no such file");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_text(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
