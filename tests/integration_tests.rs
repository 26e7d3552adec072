// Integration tests for ArchIntent

use actix_web::{http::StatusCode, test, web, App};
use arch_intent::core::{Catalog, Matcher};
use arch_intent::routes::{self, AppState};
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(Catalog::builtin(), Matcher::default())))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

macro_rules! post_analyze {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/analyze-intent")
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        let status: StatusCode = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_spacious_modern_home() {
    let app = init_app!();
    let (status, body) = post_analyze!(&app, json!({"text": "I want a spacious modern home"}));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["decoded_intent"]["style"], "Modern");
    assert_eq!(body["decoded_intent"]["size"], "Large (1 Kanal+)");
    assert_eq!(body["decoded_intent"]["extracted_keywords"], json!(["spacious", "modern"]));

    let top_tags = body["recommended_professionals"][0]["style_tags"].as_array().unwrap();
    assert!(top_tags.contains(&json!("Modern")));
}

#[actix_web::test]
async fn test_classic_brick_house() {
    let app = init_app!();
    let (status, body) = post_analyze!(&app, json!({"text": "Looking for a classic brick house"}));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded_intent"]["style"], "Classic");

    let top = &body["recommended_professionals"][0];
    assert_eq!(top["name"], "Bob Builder");
    assert!(top["style_tags"].as_array().unwrap().contains(&json!("Classic")));
}

#[actix_web::test]
async fn test_empty_text_ranks_all_profiles() {
    let app = init_app!();
    let (status, body) = post_analyze!(&app, json!({"text": ""}));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded_intent"]["style"], "Unknown");
    assert_eq!(body["decoded_intent"]["size"], "Standard");
    assert_eq!(body["decoded_intent"]["extracted_keywords"], json!([]));

    let profiles = body["recommended_professionals"].as_array().unwrap();
    assert_eq!(profiles.len(), 4);

    let scores: Vec<f64> = profiles
        .iter()
        .map(|p| p["match_score"].as_f64().unwrap())
        .collect();
    for score in &scores {
        assert!(*score >= 0.60 && *score <= 0.99);
    }
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[actix_web::test]
async fn test_profile_fields_in_response() {
    let app = init_app!();
    let (_, body) = post_analyze!(&app, json!({"text": "an eco friendly bamboo retreat"}));

    let top = &body["recommended_professionals"][0];
    assert_eq!(top["id"], 4);
    assert_eq!(top["name"], "Dana Eco");
    assert_eq!(top["portfolio_highlight"], "Green Roof Complex");
    assert!(top["match_score"].is_f64());
}

#[actix_web::test]
async fn test_missing_text_field() {
    let app = init_app!();
    let (status, body) = post_analyze!(&app, json!({"message": "modern"}));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing 'text' field in payload"}));
}

#[actix_web::test]
async fn test_null_payload_and_null_text() {
    let app = init_app!();

    let (status, body) = post_analyze!(&app, Value::Null);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'text' field in payload");

    let (status, body) = post_analyze!(&app, json!({"text": null}));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'text' field in payload");
}

#[actix_web::test]
async fn test_non_string_text_is_rejected() {
    let app = init_app!();
    let (status, body) = post_analyze!(&app, json!({"text": 42}));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON payload"));
}

#[actix_web::test]
async fn test_malformed_json() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/analyze-intent")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"text\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON payload"));
}

#[actix_web::test]
async fn test_text_too_long() {
    let app = init_app!();
    let text = "modern ".repeat(2000);
    let (status, body) = post_analyze!(&app, json!({ "text": text }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "'text' exceeds 10000 characters"}));
    assert!(!body["error"].as_str().unwrap().contains("modern"));
}

#[actix_web::test]
async fn test_text_at_length_limit_is_accepted() {
    let app = init_app!();
    let text = "a".repeat(10_000);
    let (status, body) = post_analyze!(&app, json!({ "text": text }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded_intent"]["extracted_keywords"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_non_object_payloads_are_missing_text() {
    let app = init_app!();

    for payload in [json!([]), json!(["text"]), json!("text"), json!(7), json!(true)] {
        let (status, body) = post_analyze!(&app, payload.clone());
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body, json!({"error": "Missing 'text' field in payload"}));
    }
}

#[actix_web::test]
async fn test_service_info() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["service"], "ArchIntent AI Microservice");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog_size"], 4);
}

#[actix_web::test]
async fn test_custom_catalog_is_used() {
    let catalog = Catalog::new(vec![arch_intent::ProfileRecord {
        id: 99,
        name: "Solo Studio".to_string(),
        style_tags: vec!["Industrial".to_string()],
        portfolio_highlight: "Mill Conversion".to_string(),
    }])
    .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(catalog, Matcher::default())))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let (status, body) = post_analyze!(&app, json!({"text": "industrial loft"}));
    assert_eq!(status, StatusCode::OK);

    let profiles = body["recommended_professionals"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["id"], 99);
    let score = profiles[0]["match_score"].as_f64().unwrap();
    assert!(score >= 0.90 && score <= 0.95);
}
