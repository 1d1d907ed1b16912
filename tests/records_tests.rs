use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[macro_use]
mod common;

use common::{TestDb, employee, fake_name, manual_package, resident};

#[actix_web::test]
async fn test_resident_crud_and_search() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let name = fake_name();
    let req = test::TestRequest::post()
        .uri("/api/v1/residents")
        .set_json(resident(&name, "501", "D"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/residents?search=456.789")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/residents?status=inactive")
        .to_request();
    let inactive: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(inactive["data"], json!([]));

    let mut update = resident(&name, "502", "D");
    update["status"] = json!("inactive");
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/residents/{}", id))
        .set_json(update)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["unit"], "502");
    assert_eq!(updated["data"]["status"], "inactive");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/residents/{}", id))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["data"]["deleted"], true);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/residents/{}", id))
        .set_json(resident(&name, "502", "D"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_material_return_is_one_way() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/materials")
        .set_json(json!({
            "materialName": "Escada",
            "borrowerType": "resident",
            "borrowerName": "Ana Souza",
            "unit": "101",
            "block": "A"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let loan: Value = test::read_body_json(resp).await;
    let id = loan["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(loan["data"]["status"], "borrowed");
    assert_eq!(loan["data"]["returnDate"], Value::Null);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/materials/{}/return", id))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["data"]["status"], "returned");
    let return_date = first["data"]["returnDate"].clone();
    assert!(return_date.is_string());

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/materials/{}/return", id))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["data"]["returnDate"], return_date);

    let req = test::TestRequest::get()
        .uri("/api/v1/materials?status=borrowed")
        .to_request();
    let borrowed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(borrowed["data"], json!([]));

    let req = test::TestRequest::post()
        .uri("/api/v1/materials")
        .set_json(json!({
            "materialName": "  ",
            "borrowerType": "third_party",
            "borrowerName": "Eletricista"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_visitor_entry_and_exit() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let visitor_name = fake_name();
    let req = test::TestRequest::post()
        .uri("/api/v1/visitors")
        .set_json(json!({
            "name": visitor_name,
            "document": "RG 12.345.678-9",
            "host": {
                "kind": "manual",
                "recipientName": "Carlos Lima",
                "unit": "202",
                "block": "B"
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let entry: Value = test::read_body_json(resp).await;
    let id = entry["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(entry["data"]["status"], "inside");
    assert_eq!(entry["data"]["residentName"], "Carlos Lima");

    let req = test::TestRequest::get()
        .uri("/api/v1/visitors?status=inside&search=carlos")
        .to_request();
    let inside: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(inside["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/visitors/{}/exit", id))
        .to_request();
    let exit: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(exit["data"]["status"], "left");
    assert!(exit["data"]["exitTime"].is_string());

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/visitors/{}/exit", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_dashboard_counts_desk_activity() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    for (name, status) in [("Alice", "active"), ("Bruno", "inactive")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee(name, status))
            .to_request();
        test::call_service(&app, req).await;
    }

    for unit in ["101", "102"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/packages")
            .set_json(manual_package("Morador", unit, "A"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/packages/groups/pickup")
        .set_json(json!({ "unit": "101", "block": "A", "pickedUpBy": "Morador" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!({
            "pendingPackages": 1,
            "totalPackages": 2,
            "totalOccurrences": 0,
            "activeEmployees": 1,
            "totalEmployees": 2,
            "visitorsInside": 0,
            "materialsOnLoan": 0
        })
    );
}

#[actix_web::test]
async fn test_health_echoes_correlation_id() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/health")
        .insert_header(("X-Correlation-ID", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-correlation-id").unwrap().to_str().unwrap(),
        "abc-123"
    );
}
