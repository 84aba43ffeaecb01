//! Direct dispatch through the service, no transport involved.

use fleetman::api::{Method, Request, ResponseBody};
use fleetman::{ValidationPolicy, VehicleStore};
use serde_json::{json, Value};

use crate::support::{fleet, vehicle};

fn body(resp: &fleetman::Response) -> &Value {
    resp.json_body().expect("json body")
}

#[test]
fn health_reports_up() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/health"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp)["status"], "UP");
    assert!(body(&resp)["timestamp"].is_string());
}

#[test]
fn health_shape_is_stable() {
    let service = fleet();
    let a = service.dispatch(&Request::get("/health"));
    let b = service.dispatch(&Request::get("/health"));
    let keys = |v: &Value| {
        let mut k: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        k.sort();
        k
    };
    assert_eq!(keys(body(&a)), keys(body(&b)));
}

#[test]
fn status_endpoint() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/api/status"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp)["message"], "Fleetman Webapp API");
    assert_eq!(body(&resp)["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body(&resp)["status"], "running");
}

#[test]
fn home_page_is_html() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/"));
    assert_eq!(resp.status, 200);
    match &resp.body {
        ResponseBody::Html(page) => {
            assert!(page.contains("Fleet Management System"));
            assert!(page.contains("<html"));
            assert!(page.contains("</html>"));
        }
        other => panic!("expected html, got {other:?}"),
    }
}

#[test]
fn home_echoes_data_parameter() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/").with_query("data", r#"{"fleet":[1,2]}"#));
    assert_eq!(resp.status, 200);
    assert_eq!(
        body(&resp),
        &json!({ "message": "Fleet Management System", "data": { "fleet": [1, 2] } })
    );
}

#[test]
fn home_rejects_malformed_data_parameter() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/").with_query("data", "{not json"));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Invalid JSON in data parameter" }));
}

#[test]
fn create_vehicle_echoes_input() {
    let service = fleet();
    let input = vehicle("V001", "Vehicle 1", "active");
    let resp = service.dispatch(&Request::post("/api/vehicles", input.clone()));
    assert_eq!(resp.status, 201);
    assert_eq!(body(&resp), &input);
}

#[test]
fn create_vehicle_keeps_status() {
    let service = fleet();
    let resp = service.dispatch(&Request::post(
        "/api/vehicles",
        vehicle("V004", "Vehicle 4", "inactive"),
    ));
    assert_eq!(body(&resp)["status"], "inactive");
}

#[test]
fn create_vehicle_accepts_conventional_statuses() {
    let service = fleet();
    for (i, status) in ["active", "inactive", "maintenance"].iter().enumerate() {
        let resp = service.dispatch(&Request::post(
            "/api/vehicles",
            vehicle(&format!("V{}", 100 + i), "Test", status),
        ));
        assert_eq!(resp.status, 201, "status {status}");
    }
    assert_eq!(service.store().len().unwrap(), 3);
}

#[test]
fn create_vehicle_accepts_unconventional_status() {
    let service = fleet();
    let resp = service.dispatch(&Request::post(
        "/api/vehicles",
        vehicle("V200", "Test", "scrapped"),
    ));
    assert_eq!(resp.status, 201);
    assert_eq!(body(&resp)["status"], "scrapped");
}

#[test]
fn create_vehicle_rejects_missing_fields() {
    let service = fleet();
    for bad in [
        json!({ "name": "Vehicle 1", "status": "active" }),
        json!({ "id": "V1", "status": "active" }),
        json!({ "id": "V1", "name": "", "status": "active" }),
        json!({ "id": "V1", "name": "Vehicle 1", "status": null }),
        json!({ "id": 0, "name": "Vehicle 1", "status": "active" }),
        Value::Null,
    ] {
        let resp = service.dispatch(&Request::post("/api/vehicles", bad.clone()));
        assert_eq!(resp.status, 400, "payload {bad}");
        assert_eq!(body(&resp), &json!({ "error": "Invalid vehicle" }));
    }
    assert!(service.store().is_empty().unwrap());
}

#[test]
fn strict_policy_enforces_id_format() {
    let service = fleet().with_policy(ValidationPolicy::strict());
    let resp = service.dispatch(&Request::post("/api/vehicles", vehicle("truck-1", "Truck", "active")));
    assert_eq!(resp.status, 400);

    let resp = service.dispatch(&Request::post("/api/vehicles", vehicle("V005", "Truck", "active")));
    assert_eq!(resp.status, 201);
}

#[test]
fn list_empty() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/api/vehicles"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), &json!({ "vehicles": [], "page": 1, "limit": 10 }));
}

#[test]
fn list_pages_through_stored_vehicles() {
    let service = fleet();
    for i in 1..=5 {
        service.dispatch(&Request::post(
            "/api/vehicles",
            vehicle(&format!("V{i}"), &format!("Vehicle {i}"), "active"),
        ));
    }

    let resp = service.dispatch(
        &Request::get("/api/vehicles")
            .with_query("page", "2")
            .with_query("limit", "2"),
    );
    assert_eq!(resp.status, 200);
    let ids: Vec<&str> = body(&resp)["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["V3", "V4"]);
    assert_eq!(body(&resp)["page"], 2);
    assert_eq!(body(&resp)["limit"], 2);
}

#[test]
fn list_rejects_out_of_range_pagination() {
    let service = fleet();

    let resp = service.dispatch(&Request::get("/api/vehicles").with_query("page", "101"));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Page too high" }));

    let resp = service.dispatch(&Request::get("/api/vehicles").with_query("limit", "51"));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Limit too high" }));

    // Only one response, and the page check wins.
    let resp = service.dispatch(
        &Request::get("/api/vehicles")
            .with_query("page", "101")
            .with_query("limit", "51"),
    );
    assert_eq!(body(&resp), &json!({ "error": "Page too high" }));

    let resp = service.dispatch(&Request::get("/api/vehicles").with_query("page", "two"));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Invalid page" }));
}

#[test]
fn update_overwrites_existing_vehicle() {
    let service = fleet();
    service.dispatch(&Request::post("/api/vehicles", vehicle("V1", "Van", "active")));

    let resp = service.dispatch(&Request::post(
        "/api/update",
        json!({ "id": "V1", "name": "Van", "status": "maintenance" }),
    ));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), &json!({ "success": true }));

    let stored = service.store().get("V1").unwrap().unwrap();
    assert_eq!(stored.status(), Some("maintenance"));
    assert_eq!(service.store().len().unwrap(), 1);
}

#[test]
fn update_does_not_validate_name_or_status() {
    let service = fleet();
    let resp = service.dispatch(&Request::post("/api/update", json!({ "id": "V9" })));
    assert_eq!(resp.status, 200);

    let stored = service.store().get("V9").unwrap().unwrap();
    assert_eq!(stored.name(), None);
    assert_eq!(stored.status(), None);
}

#[test]
fn update_requires_id() {
    let service = fleet();
    let resp = service.dispatch(&Request::post("/api/update", json!({ "name": "Van" })));
    assert_eq!(resp.status, 400);
    assert!(service.store().is_empty().unwrap());
}

#[test]
fn search_matches_name_substring() {
    let service = fleet();
    service.dispatch(&Request::post("/api/vehicles", vehicle("V1", "Delivery Van", "active")));
    service.dispatch(&Request::post("/api/vehicles", vehicle("V2", "Tow Truck", "active")));

    let resp = service.dispatch(&Request::get("/api/search").with_query("q", "Van"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), &json!([vehicle("V1", "Delivery Van", "active")]));

    let resp = service.dispatch(&Request::get("/api/search").with_query("q", "van"));
    assert_eq!(body(&resp), &json!([]));
}

#[test]
fn search_tolerates_partial_entries() {
    let service = fleet();
    service.dispatch(&Request::post(
        "/api/batch",
        json!({ "vehicles": [{ "id": "V1" }, { "id": "V2", "name": "Van" }] }),
    ));

    let resp = service.dispatch(&Request::get("/api/search"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), &json!([{ "id": "V2", "name": "Van" }]));
}

#[test]
fn batch_inserts_without_validation() {
    let service = fleet();
    let resp = service.dispatch(&Request::post(
        "/api/batch",
        json!({ "vehicles": [
            vehicle("V1", "Van", "active"),
            { "name": "No id" },
            "not even an object",
        ] }),
    ));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), &json!({ "count": 3 }));
    assert_eq!(service.store().len().unwrap(), 3);
}

#[test]
fn batch_requires_vehicles_array() {
    let service = fleet();

    let resp = service.dispatch(&Request::post("/api/batch", json!({})));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Invalid batch: vehicles is required" }));

    let resp = service.dispatch(&Request::post("/api/batch", json!({ "vehicles": "V1" })));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp), &json!({ "error": "Invalid batch: vehicles must be an array" }));
}

#[test]
fn unknown_route_is_404() {
    let service = fleet();
    let resp = service.dispatch(&Request::get("/unknown-route"));
    assert_eq!(resp.status, 404);

    let resp = service.dispatch(&Request::new(Method::Delete, "/api/vehicles"));
    assert_eq!(resp.status, 404);
}

#[test]
fn head_and_trailing_slash_reach_get_routes() {
    let service = fleet();
    let resp = service.dispatch(&Request::new(Method::Head, "/health"));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, ResponseBody::Empty);

    let resp = service.dispatch(&Request::get("/health/"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp)["status"], "UP");

    let resp = service.dispatch(&Request::get("/api/vehicles/").with_query("page", "101"));
    assert_eq!(body(&resp), &json!({ "error": "Page too high" }));
}

#[test]
fn all_routes_registered() {
    let service = fleet();
    let mut routes: Vec<String> = service
        .routes()
        .into_iter()
        .map(|(m, p)| format!("{m} {p}"))
        .collect();
    routes.sort();
    assert_eq!(
        routes,
        vec![
            "GET /",
            "GET /api/search",
            "GET /api/status",
            "GET /api/vehicles",
            "GET /health",
            "POST /api/batch",
            "POST /api/update",
            "POST /api/vehicles",
        ]
    );
}
