use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[macro_use]
mod common;

use common::{TestDb, employee};

const FALLBACK_ADMIN: &str = "Administrador (Acesso Inicial)";

#[actix_web::test]
async fn test_roster_falls_back_to_admin_when_empty() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/session/roster")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!([{ "id": null, "name": FALLBACK_ADMIN, "active": true }])
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/session/login")
        .set_json(json!({ "name": FALLBACK_ADMIN }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"], json!({ "name": FALLBACK_ADMIN, "role": "OPERADOR" }));
}

#[actix_web::test]
async fn test_login_rejects_inactive_and_unknown_employees() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    for (name, status) in [("Alice", "active"), ("Bruno", "vacation")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee(name, status))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/session/roster")
        .to_request();
    let roster: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = roster["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bruno"]);

    let req = test::TestRequest::post()
        .uri("/api/v1/session/login")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for name in ["Bruno", FALLBACK_ADMIN, ""] {
        let req = test::TestRequest::post()
            .uri("/api/v1/session/login")
            .set_json(json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "login as {:?}", name);
    }
}

#[actix_web::test]
async fn test_handover_creates_occurrence_with_long_timestamp() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    for name in ["Alice", "Bruno"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee(name, "active"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences/handover")
        .insert_header(("X-Operator-Name", "Alice"))
        .set_json(json!({
            "outgoingEmployeeName": "Alice",
            "incomingEmployeeName": "Bruno",
            "note": "  Portão da garagem travando.  "
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let occurrence = &body["data"];
    assert_eq!(occurrence["outgoingEmployeeName"], "Alice");
    assert_eq!(occurrence["incomingEmployeeName"], "Bruno");
    assert_eq!(occurrence["description"], "Portão da garagem travando.");

    let timestamp = occurrence["timestamp"].as_str().unwrap();
    assert!(timestamp.contains(" de "), "{}", timestamp);
    assert!(timestamp.contains(" às "), "{}", timestamp);

    let req = test::TestRequest::get()
        .uri("/api/v1/occurrences?search=GARAGEM")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/occurrences?search=piscina")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"], json!([]));
}

#[actix_web::test]
async fn test_rejected_handover_returns_the_draft() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let draft = json!({
        "outgoingEmployeeName": FALLBACK_ADMIN,
        "incomingEmployeeName": "Ninguém",
        "note": "Entregar chave do salão ao síndico"
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences/handover")
        .set_json(draft.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], draft);
    assert_eq!(body["message"], "Employee is not on the roster: Ninguém");

    let req = test::TestRequest::get().uri("/api/v1/occurrences").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"], json!([]));
}

#[actix_web::test]
async fn test_handover_needs_a_note() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences/handover")
        .set_json(json!({
            "outgoingEmployeeName": FALLBACK_ADMIN,
            "incomingEmployeeName": FALLBACK_ADMIN,
            "note": "   "
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Handover note is empty");
    assert_eq!(body["data"]["note"], "   ");
}

#[actix_web::test]
async fn test_direct_occurrence_and_delete() {
    let db = TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(json!({
            "outgoingEmployeeName": FALLBACK_ADMIN,
            "incomingEmployeeName": FALLBACK_ADMIN,
            "description": "Lâmpada do hall queimada"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/occurrences/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/occurrences/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["deleted"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/occurrences/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
