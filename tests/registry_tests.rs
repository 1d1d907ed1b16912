use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

#[macro_use]
mod common;

use common::{TestDb, employee, resident};

fn manual_item(left_by: &str, description: &str, unit: &str) -> Value {
    json!({
        "operationType": "external_to_resident",
        "recipient": {
            "kind": "manual",
            "recipientName": "Morador",
            "unit": unit,
            "block": "A"
        },
        "leftBy": left_by,
        "description": description,
        "shift": "Diurno"
    })
}

fn company(name: &str, company_type: &str, status: &str) -> Value {
    json!({
        "name": name,
        "companyType": company_type,
        "status": status
    })
}

#[actix_web::test]
async fn test_received_item_pickup_is_one_way() {
    common::setup_test_env();
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/received-items")
        .insert_header(("X-Operator-Name", "Marta"))
        .set_json(manual_item("Tia Rosa", "Chave do apartamento", "101"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["status"], "awaiting_pickup");
    assert_eq!(created["data"]["recipientName"], "Morador");
    assert_eq!(created["data"]["receivedAt"].as_str().unwrap().len(), 14);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/received-items/{}/pickup", id))
        .set_json(json!({ "pickedUpBy": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/received-items/{}/pickup", id))
        .set_json(json!({ "pickedUpBy": "  Carla  " }))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["data"]["status"], "picked_up");
    assert_eq!(first["data"]["pickedUpBy"], "Carla");
    let picked_up_at = first["data"]["pickedUpAt"].clone();
    assert!(picked_up_at.is_string());

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/received-items/{}/pickup", id))
        .set_json(json!({ "pickedUpBy": "Outra Pessoa" }))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["data"]["pickedUpBy"], "Carla");
    assert_eq!(second["data"]["pickedUpAt"], picked_up_at);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/received-items/{}/pickup", Uuid::new_v4()))
        .set_json(json!({ "pickedUpBy": "Carla" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_received_items_list_defaults_to_pending() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/residents")
        .set_json(resident("Carlos Lima", "202", "B"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let resident_id = created["data"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/api/v1/received-items")
        .set_json(json!({
            "operationType": "resident_to_external",
            "recipient": { "kind": "linked", "residentId": resident_id },
            "leftBy": "Carlos Lima",
            "description": "Envelope para o eletricista"
        }))
        .to_request();
    let linked: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(linked["data"]["unit"], "202");
    assert_eq!(linked["data"]["block"], "B");
    assert_eq!(linked["data"]["residentId"], resident_id);

    let req = test::TestRequest::post()
        .uri("/api/v1/received-items")
        .set_json(manual_item("Vizinho", "Bolo", "305"))
        .to_request();
    let cake: Value = test::call_and_read_body_json(&app, req).await;
    let cake_id = cake["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/received-items/{}/pickup", cake_id))
        .set_json(json!({ "pickedUpBy": "Morador" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/received-items")
        .to_request();
    let pending: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending["data"].as_array().unwrap().len(), 1);
    assert_eq!(pending["data"][0]["description"], "Envelope para o eletricista");

    let req = test::TestRequest::get()
        .uri("/api/v1/received-items?status=all&search=BOLO")
        .to_request();
    let searched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(searched["data"].as_array().unwrap().len(), 1);
    assert_eq!(searched["data"][0]["id"], cake_id.as_str());

    let mut missing = manual_item("Vizinho", "Bolo", "305");
    missing["leftBy"] = json!("  ");
    let req = test::TestRequest::post()
        .uri("/api/v1/received-items")
        .set_json(missing)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Bad request: Field is required: leftBy");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/received-items/{}", cake_id))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["data"]["deleted"], true);
}

#[actix_web::test]
async fn test_company_crud_and_search() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let mut ids = Vec::new();
    for (name, company_type, status) in [
        ("Transportadora Veloz", "carrier", "active"),
        ("Correios", "post_office", "active"),
        ("Loja Fechada", "marketplace", "inactive"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/companies")
            .set_json(company(name, company_type, status))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/companies")
        .to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Correios", "Loja Fechada", "Transportadora Veloz"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/companies?search=veloz&status=active")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
    assert_eq!(found["data"][0]["companyType"], "carrier");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/companies/{}", ids[2]))
        .set_json(company("Loja Reaberta", "marketplace", "active"))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["name"], "Loja Reaberta");

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .set_json(company("  ", "other", "active"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/companies/{}", ids[0]))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["data"]["deleted"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/companies/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delivery_driver_and_visit_copy_company_names() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .set_json(company("Transportadora Veloz", "carrier", "active"))
        .to_request();
    let carrier: Value = test::call_and_read_body_json(&app, req).await;
    let company_id = carrier["data"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/api/v1/deliveries/drivers")
        .set_json(json!({
            "name": "João Entregador",
            "companyId": company_id,
            "cpf": "111.222.333-44",
            "status": "active"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let driver: Value = test::read_body_json(resp).await;
    let driver_id = driver["data"]["id"].clone();
    assert_eq!(driver["data"]["companyName"], "Transportadora Veloz");

    let req = test::TestRequest::post()
        .uri("/api/v1/deliveries/drivers")
        .set_json(json!({
            "name": "Autônomo",
            "companyId": Uuid::new_v4(),
            "status": "blocked"
        }))
        .to_request();
    let orphan: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(orphan["data"]["companyName"], "N/A");

    let req = test::TestRequest::get()
        .uri("/api/v1/deliveries/drivers?search=333")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
    assert_eq!(found["data"][0]["name"], "João Entregador");

    let req = test::TestRequest::post()
        .uri("/api/v1/deliveries/visits")
        .set_json(json!({
            "driverId": driver_id,
            "packageCount": 4,
            "shift": "day"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let visit: Value = test::read_body_json(resp).await;
    let visit_id = visit["data"]["id"].as_str().unwrap().to_string();
    let entry_time = visit["data"]["entryTime"].clone();
    assert_eq!(visit["data"]["driverName"], "João Entregador");
    assert_eq!(visit["data"]["companyName"], "Transportadora Veloz");

    let req = test::TestRequest::post()
        .uri("/api/v1/deliveries/visits")
        .set_json(json!({
            "driverName": "Motoboy",
            "companyName": "Farmácia",
            "packageCount": 1,
            "shift": "night"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/deliveries/visits/stats")
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["data"], json!({ "visitsToday": 2, "packagesToday": 5 }));

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/deliveries/visits/{}", visit_id))
        .set_json(json!({
            "driverId": driver_id,
            "packageCount": 6,
            "shift": "day",
            "observations": "Duas caixas amassadas"
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["packageCount"], 6);
    assert_eq!(updated["data"]["entryTime"], entry_time);

    let req = test::TestRequest::get()
        .uri("/api/v1/deliveries/visits?search=amassadas")
        .to_request();
    let searched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(searched["data"].as_array().unwrap().len(), 1);

    for body in [
        json!({ "driverId": Uuid::new_v4(), "packageCount": 1, "shift": "day" }),
        json!({ "driverName": "Motoboy", "packageCount": -1, "shift": "day" }),
        json!({ "driverName": " ", "packageCount": 1, "shift": "day" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/deliveries/visits")
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error(), "visit {}", body);
    }
}

#[actix_web::test]
async fn test_time_records_filter_and_clear() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let mut employee_ids = Vec::new();
    for name in ["Alice", "Bruno"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee(name, "active"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        employee_ids.push(body["data"]["id"].clone());
    }

    for (employee_id, date, shift, record_type) in [
        (&employee_ids[0], "2025-03-04", "day", "regular"),
        (&employee_ids[0], "2025-03-05", "day", "overtime"),
        (&employee_ids[1], "2025-03-05", "night", "absence"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/time-records")
            .set_json(json!({
                "employeeId": employee_id,
                "recordDate": date,
                "shift": shift,
                "entryTime": "07:00",
                "exitTime": "19:00",
                "recordType": record_type
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/time-records")
        .to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    let rows: Vec<(&str, &str)> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["employeeName"].as_str().unwrap(),
                r["recordDate"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Bruno", "2025-03-05"),
            ("Alice", "2025-03-05"),
            ("Alice", "2025-03-04"),
        ]
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/time-records?shift=night")
        .to_request();
    let night: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(night["data"].as_array().unwrap().len(), 1);
    assert_eq!(night["data"][0]["recordType"], "absence");

    let alice = employee_ids[0].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/time-records?employeeId={}", alice))
        .to_request();
    let by_employee: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_employee["data"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::post()
        .uri("/api/v1/time-records")
        .set_json(json!({
            "employeeId": Uuid::new_v4(),
            "recordDate": "2025-03-05",
            "shift": "day",
            "recordType": "regular"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/v1/time-records")
        .to_request();
    let cleared: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cleared["data"]["cleared"], 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/time-records")
        .to_request();
    let empty: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(empty["data"], json!([]));
}
