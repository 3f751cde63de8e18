use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::billing::domain::{BillField, BillInput, RawBillForm};
use crate::billing::validation::validate;

/// The form from the first worked example: 8 days, 3 people, rent 1000, bills 100/50/80/0.
pub(super) fn shared_flat_form() -> RawBillForm {
    RawBillForm::new()
        .with(BillField::Days, 8u32)
        .with(BillField::Person, 3u32)
        .with(BillField::Rent, 1000u32)
        .with(BillField::WaterBill, 100u32)
        .with(BillField::EnergyBill, 50u32)
        .with(BillField::InternetBill, 80u32)
        .with(BillField::Others, 0u32)
}

/// A single tenant occupying the whole month with no bills.
pub(super) fn solo_full_month_form() -> RawBillForm {
    RawBillForm::new()
        .with(BillField::Days, "30")
        .with(BillField::Person, "1")
        .with(BillField::Rent, "1200")
        .with(BillField::WaterBill, "0")
        .with(BillField::EnergyBill, "0")
        .with(BillField::InternetBill, "0")
        .with(BillField::Others, "0")
}

pub(super) fn validated(form: &RawBillForm) -> BillInput {
    validate(form).expect("form is valid")
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
