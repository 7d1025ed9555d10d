use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::evaluation::repository::EvaluationRepository;
use crate::workflows::evaluation::router::evaluation_router;
use crate::workflows::evaluation::service::EvaluationService;

fn get_request(path: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(path)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn json_request(
    method: &str,
    path: &str,
    payload: serde_json::Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(path)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn read_route_generates_and_persists_on_miss() {
    let (service, repository, _directory) = build_service();
    let router = evaluation_router(service);

    let response = router
        .oneshot(get_request("/api/v1/evaluations/90123/2024"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["salesmanId"], json!(90123));
    assert_eq!(payload["totalBonus"], json!(370));
    assert_eq!(payload["acceptedHR"], json!(false));

    let stored = repository
        .find(SALESMAN_ID, YEAR)
        .expect("find succeeds")
        .expect("read-through persisted the draft");
    assert_eq!(stored.total_bonus(), 370);
}

#[tokio::test]
async fn read_route_returns_the_stored_document_on_a_hit() {
    let (service, _repository, _directory) = build_service();

    let draft = service.generate(SALESMAN_ID, YEAR).expect("draft generates");
    service
        .create(draft.with_remark("already here"))
        .expect("create succeeds");

    let router = evaluation_router(service);
    let response = router
        .oneshot(get_request("/api/v1/evaluations/90123/2024"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["remark"], json!("already here"));
}

#[tokio::test]
async fn read_route_reports_unknown_salesmen_as_not_found() {
    let (service, _repository, _directory) = build_service();
    let router = evaluation_router(service);

    let response = router
        .oneshot(get_request("/api/v1/evaluations/99999/2024"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_route_returns_created_then_conflict() {
    let (service, _repository, _directory) = build_service();
    let router = evaluation_router(service);

    let document = json!({
        "salesmanId": 90123,
        "year": 2024,
        "fullname": "John Smith",
        "department": "Sales",
    });

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/v1/evaluations", document.clone()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(json_request("POST", "/api/v1/evaluations", document))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_route_rejects_invalid_documents() {
    let (service, _repository, _directory) = build_service();
    let router = evaluation_router(service);

    let document = json!({
        "salesmanId": 0,
        "year": 2024,
        "fullname": "John Smith",
        "department": "Sales",
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/evaluations", document))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_route_patches_stored_fields() {
    let (service, _repository, _directory) = build_service();
    let draft = service.generate(SALESMAN_ID, YEAR).expect("draft generates");
    service.create(draft).expect("create succeeds");

    let router = evaluation_router(service);
    let response = router
        .oneshot(json_request(
            "PATCH",
            "/api/v1/evaluations/90123/2024",
            json!({ "remark": "great year" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["remark"], json!("great year"));
    assert_eq!(payload["totalBonus"], json!(370));
}

#[tokio::test]
async fn update_route_rejects_entries_with_a_forged_bonus() {
    let (service, repository, _directory) = build_service();
    let draft = service.generate(SALESMAN_ID, YEAR).expect("draft generates");
    service.create(draft).expect("create succeeds");

    let router = evaluation_router(service);
    let response = router
        .oneshot(json_request(
            "PATCH",
            "/api/v1/evaluations/90123/2024",
            json!({
                "socialEvaluation": [{
                    "salesmanId": 90123,
                    "socialId": 1,
                    "description": "Leadership Competence",
                    "targetValue": 20.0,
                    "actualValue": 25.0,
                    "year": 2024,
                    "bonus": 7,
                }],
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stored = repository
        .find(SALESMAN_ID, YEAR)
        .expect("find succeeds")
        .expect("record present");
    assert_eq!(stored.social_evaluation()[0].bonus(), 250);
}

#[tokio::test]
async fn update_route_returns_not_found_for_missing_records() {
    let (service, _repository, _directory) = build_service();
    let router = evaluation_router(service);

    let response = router
        .oneshot(json_request(
            "PATCH",
            "/api/v1/evaluations/90123/2021",
            json!({ "remark": "nothing stored" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn accept_routes_flip_exactly_one_flag() {
    let (service, repository, _directory) = build_service();
    let draft = service.generate(SALESMAN_ID, YEAR).expect("draft generates");
    service.create(draft).expect("create succeeds");

    let router = evaluation_router(service);
    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/evaluations/90123/2024/accept/hr",
            json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["acceptedHR"], json!(true));
    assert_eq!(payload["acceptedCEO"], json!(false));
    assert_eq!(payload["fullyAccepted"], json!(false));

    let stored = repository
        .find(SALESMAN_ID, YEAR)
        .expect("find succeeds")
        .expect("record present");
    assert!(stored.accepted_hr());
}

#[tokio::test]
async fn accept_route_rejects_unknown_roles() {
    let (service, _repository, _directory) = build_service();
    let router = evaluation_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/evaluations/90123/2024/accept/cfo",
            json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_outages_surface_as_internal_errors() {
    let directory = directory();
    let service = Arc::new(EvaluationService::new(
        Arc::new(UnavailableRepository),
        generator(&directory),
    ));
    let router = evaluation_router(service);

    let response = router
        .oneshot(get_request("/api/v1/evaluations/90123/2024"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
