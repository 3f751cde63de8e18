use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::billing::domain::RawBillForm;
use crate::billing::router::split_router;

#[tokio::test]
async fn split_endpoint_returns_formatted_shares() {
    let router = split_router(RawBillForm::seeded());
    let body = json!({
        "days": "8",
        "person": 3,
        "rent": "1000",
        "waterBill": "100",
        "energyBill": 50,
        "internetBill": "80",
        "others": "0",
    });

    let response = router
        .oneshot(json_request("/api/v1/bills/split", &body))
        .await
        .expect("router responds");
    let (status, value) = read_json(response).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(value["formatted"]["rentShare"], "R$ 88,89");
    assert_eq!(value["formatted"]["billsShare"], "R$ 76,67");
    assert_eq!(value["formatted"]["totalShare"], "R$ 165,56");
}

#[tokio::test]
async fn split_endpoint_reports_field_errors() {
    let router = split_router(RawBillForm::seeded());
    let body = json!({
        "days": 45,
        "person": "três",
        "rent": 1000,
        "waterBill": 0,
        "energyBill": 0,
        "internetBill": 0,
        "others": 0,
    });

    let response = router
        .oneshot(json_request("/api/v1/bills/split", &body))
        .await
        .expect("router responds");
    let (status, value) = read_json(response).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        value,
        json!({
            "errors": {
                "person": "Informe um número de pessoas válido",
                "days": "Os dias usados devem estar entre 1 e 30",
            }
        })
    );
}

#[tokio::test]
async fn defaults_endpoint_returns_seed_values() {
    let router = split_router(RawBillForm::seeded());
    let request = axum::http::Request::builder()
        .uri("/api/v1/bills/defaults")
        .body(axum::body::Body::empty())
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let (status, value) = read_json(response).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(value, json!({ "person": "3", "days": "8", "rent": "1000" }));
}
