//! Integration tests for the user endpoints

use actix_web::{http::StatusCode, test, web};
use chrono::{Datelike, Local};
use serde_json::{json, Value};
use std::sync::Arc;

use ur_api::app::{create_app, AppState};
use ur_core::repositories::InMemoryUserRepository;
use ur_core::services::{LoggedUserService, UserService};
use ur_shared::config::{AppConfig, RegistrationConfig};

type TestService = LoggedUserService<UserService<InMemoryUserRepository>>;

fn app_state(registration: RegistrationConfig) -> web::Data<AppState<TestService>> {
    let mut config = AppConfig::default();
    config.registration = registration;

    let repository = Arc::new(InMemoryUserRepository::new());
    let service = LoggedUserService::new(UserService::new(repository, &config.registration));
    web::Data::new(AppState::new(service, None, Arc::new(config)))
}

fn valid_body(username: &str) -> Value {
    json!({
        "username": username,
        "birthdate": "2000-01-01",
        "country_of_residence": "France",
        "phone_number": "1234567890",
        "gender": "Male"
    })
}

#[actix_web::test]
async fn test_register_returns_created_user() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(valid_body("testuser"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "testuser");
    assert_eq!(body["birthdate"], "2000-01-01");
    assert_eq!(body["country_of_residence"], "France");
    assert_eq!(body["phone_number"], "1234567890");
    assert_eq!(body["gender"], "Male");
}

#[actix_web::test]
async fn test_register_then_fetch_by_id_and_username() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(valid_body("roundtrip"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", created["id"]))
        .to_request();
    let by_id: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_id, created);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?username=roundtrip")
        .to_request();
    let by_name: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_name, created);
}

#[actix_web::test]
async fn test_client_supplied_id_is_ignored() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let mut body = valid_body("sneaky");
    body["id"] = json!(500);
    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created["id"], 1);
}

#[actix_web::test]
async fn test_duplicate_username_rejected() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let first = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(valid_body("testuser"))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(valid_body("testuser"))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REGISTRATION_ERROR");
    assert_eq!(body["message"], "Username is already taken");
}

#[actix_web::test]
async fn test_underage_user_rejected() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let today = Local::now().date_naive();
    let mut body = valid_body("youngster");
    body["birthdate"] = json!(format!("{}-01-01", today.year() - 10));

    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "The user must be at least 18 years old.");
}

#[actix_web::test]
async fn test_foreign_resident_rejected() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let mut body = valid_body("carioca");
    body["country_of_residence"] = json!("Brazil");

    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Only residents of France"));
}

#[actix_web::test]
async fn test_country_match_ignores_case() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let mut body = valid_body("lowercase");
    body["country_of_residence"] = json!("france");

    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_configured_rules_apply() {
    let state = app_state(RegistrationConfig::new("Brazil", 21));
    let app = test::init_service(create_app(state)).await;

    let mut body = valid_body("carioca");
    body["country_of_residence"] = json!("Brazil");
    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(valid_body("parisian"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Only residents of Brazil are allowed to register.");
}

#[actix_web::test]
async fn test_payload_validation_errors() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let mut body = valid_body("ab");
    body["gender"] = json!("Unknown");
    body["phone_number"] = json!("123");

    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(
        body["message"],
        "gender: Gender must be Male, Female, or Other, \
         phone_number: Phone number must be between 10 and 15 characters, \
         username: Username must be between 3 and 50 characters"
    );
    assert_eq!(
        body["details"]["username"],
        json!(["Username must be between 3 and 50 characters"])
    );
}

#[actix_web::test]
async fn test_birthdate_today_rejected_by_payload_check() {
    // No minimum age, so only the payload check can reject today's date
    let app = test::init_service(create_app(app_state(RegistrationConfig::new("France", 0)))).await;

    let mut body = valid_body("newborn");
    body["birthdate"] = json!(Local::now().date_naive().to_string());

    let req = test::TestRequest::post().uri("/api/v1/users").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "birthdate: Birthdate must be in the past");
}

#[actix_web::test]
async fn test_missing_required_field() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "username": "nobirth", "country_of_residence": "France" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "birthdate: Birthdate is required");
}

#[actix_web::test]
async fn test_malformed_json_rejected() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_unknown_id_returns_not_found() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::get().uri("/api/v1/users/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "User not found with ID: 42");
}

#[actix_web::test]
async fn test_unknown_username_returns_not_found() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users?username=ghost")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found with username: ghost");
}

#[actix_web::test]
async fn test_missing_username_query_is_bad_request() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_in_memory_mode() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "memory");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(app_state(RegistrationConfig::default()))).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
