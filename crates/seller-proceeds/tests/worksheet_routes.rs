use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use seller_proceeds::worksheet::{
    worksheet_router, AmountPolicy, WorksheetService, WorksheetSettings,
};
use std::sync::Arc;
use tower::ServiceExt;

fn build_router(policy: AmountPolicy) -> axum::Router {
    let service = WorksheetService::new(WorksheetSettings {
        policy,
        ..WorksheetSettings::default()
    });
    worksheet_router(Arc::new(service))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}

#[tokio::test]
async fn premium_endpoint_applies_schedule() {
    let response = build_router(AmountPolicy::Lenient)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/premium?selling_price=249800")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["premium"].as_f64(), Some(1480.0));
    assert_eq!(payload["selling_price"].as_f64(), Some(249800.0));
}

#[tokio::test]
async fn defaults_endpoint_prefills_editable_amounts() {
    let response = build_router(AmountPolicy::Lenient)
        .oneshot(post_json(
            "/api/v1/worksheet/defaults",
            json!({ "selling_price": 300000, "buyers_agent_percent": 2.5 }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["listing_commission_amount"].as_f64(), Some(9000.0));
    assert_eq!(payload["buyers_commission_amount"].as_f64(), Some(7500.0));
    assert_eq!(payload["title_insurance"].as_f64(), Some(1656.0));
    assert_eq!(payload["transfer_tax_amount"].as_f64(), Some(2580.0));
}

#[tokio::test]
async fn worksheet_endpoint_returns_totals_and_rows() {
    let response = build_router(AmountPolicy::Lenient)
        .oneshot(post_json(
            "/api/v1/worksheet",
            json!({
                "name": "Jane Seller",
                "selling_price": 300000,
                "mortgage_balance": 100000,
                "title_insurance": 1480,
                "date": "2026-10-18"
            }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(
        payload["totals"]["total_selling_expense"].as_f64(),
        Some(22060.0)
    );
    assert_eq!(
        payload["totals"]["approximate_proceeds"].as_f64(),
        Some(177940.0)
    );
    assert_eq!(payload["file_name"], json!("Seller_Cash_Proceeds_Jane_Seller.pdf"));
    assert_eq!(payload["inputs"]["date"], json!("2026-10-18"));

    let rows = payload["rows"].as_array().expect("rows array");
    assert_eq!(rows[2]["cells"], json!(["Selling Price", "$300,000.00"]));
}

#[tokio::test]
async fn worksheet_endpoint_rejects_negative_amounts_when_strict() {
    let response = build_router(AmountPolicy::RejectNegative)
        .oneshot(post_json(
            "/api/v1/worksheet",
            json!({ "selling_price": 300000, "survey": -250 }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("survey"));
}

#[tokio::test]
async fn pdf_endpoint_returns_attachment() {
    let response = build_router(AmountPolicy::Lenient)
        .oneshot(post_json(
            "/api/v1/worksheet/pdf",
            json!({ "name": "Jane Seller", "selling_price": 185000 }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Seller_Cash_Proceeds_Jane_Seller.pdf\""
    );

    let body = to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .expect("body");
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn oversized_amounts_are_unprocessable() {
    let router = build_router(AmountPolicy::Lenient);
    let requests = [
        post_json(
            "/api/v1/worksheet",
            json!({ "name": "Jane Seller", "selling_price": 3e28 }),
        ),
        post_json(
            "/api/v1/worksheet/pdf",
            json!({ "selling_price": 300000, "survey": -3e28 }),
        ),
        post_json("/api/v1/worksheet/defaults", json!({ "selling_price": 3e28 })),
        Request::builder()
            .method("GET")
            .uri("/api/v1/premium?selling_price=30000000000000000000000000000")
            .body(Body::empty())
            .expect("request"),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch");
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "unexpected status for {uri}"
        );
        let payload = read_json(response).await;
        let message = payload["error"].as_str().expect("error message");
        assert!(message.contains("out of range"), "{uri}: {message}");
    }
}
