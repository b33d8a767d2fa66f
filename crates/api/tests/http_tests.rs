mod common;

use api::app::build_router;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use common::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .oneshot(request.body(body).unwrap())
        .await
        .expect("router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_search_without_query_is_bad_request() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(app.clone(), Method::GET, "/api/jugadores/buscar", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "query too short" }));

    let (status, _) = send(app, Method::GET, "/api/jugadores/buscar?q=ab", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_with_three_characters_returns_list() {
    let app = build_router(setup_test_db().await);
    let token = unique_name("").trim().to_string();

    let (status, body) = send(app, Method::GET, &format!("/api/jugadores/buscar?q={token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(app, Method::POST, "/api/paises", Some("{\"nombre\":")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_boolean_titular_is_bad_request() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/jugadores",
        Some(r#"{"nombre":"Pele","mundial_id":1,"posicion_id":4,"titular":"si"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(app, Method::POST, "/api/mundiales", Some(r#"{"anio":1930}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "pais_id is required" }));
}

#[tokio::test]
async fn test_non_integer_path_id_is_bad_request() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(app.clone(), Method::GET, "/api/mundiales/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(app, Method::GET, "/api/paises/abc/mundiales", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_tournament_is_not_found() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(app, Method::GET, &format!("/api/mundiales/{}", i32::MAX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
    assert!(body.get("jugadores").is_none());
}

#[tokio::test]
async fn test_unknown_country_reference_is_unprocessable() {
    let app = build_router(setup_test_db().await);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/mundiales",
        Some(&json!({ "anio": 1954, "pais_id": i32::MAX }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "country does not exist" }));
}

#[tokio::test]
async fn test_registration_round_trip_over_http() {
    let app_state = setup_test_db().await;
    let app = build_router(app_state.clone());
    let country_name = unique_name("Suiza");

    let body = json!({ "nombre": country_name }).to_string();
    let (status, first) = send(app.clone(), Method::POST, "/api/paises", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(app.clone(), Method::POST, "/api/paises", Some(&body)).await;
    assert_eq!(first, second);
    assert_eq!(first["nombre"], country_name.as_str());
    let country_id = first["id"].as_i64().unwrap();

    let body = json!({ "anio": 1954, "pais_id": country_id }).to_string();
    let (status, tournament) = send(app.clone(), Method::POST, "/api/mundiales", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tournament["anio"], 1954);
    assert_eq!(tournament["pais_id"], country_id);
    assert_eq!(tournament["pais"], country_name.as_str());
    let tournament_id = tournament["id"].as_i64().unwrap();

    let (status, hosted) = send(
        app.clone(),
        Method::GET,
        &format!("/api/paises/{country_id}/mundiales"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hosted, json!([tournament.clone()]));

    let goalkeeper = position(&app_state, "Portero").await;
    let body = json!({
        "nombre": "Turek",
        "mundial_id": tournament_id,
        "posicion_id": goalkeeper.id,
        "titular": true
    })
    .to_string();
    let (status, player) = send(app.clone(), Method::POST, "/api/jugadores", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(player["posicion"], "Portero");
    assert_eq!(player["mundial_id"], tournament_id);
    assert_eq!(player["titular"], true);

    let (status, detail) = send(
        app.clone(),
        Method::GET,
        &format!("/api/mundiales/{tournament_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["pais"], country_name.as_str());
    assert_eq!(detail["jugadores"]["titulares"][0]["nombre"], "Turek");
    assert_eq!(detail["jugadores"]["titulares"][0]["posicion_abr"], "POR");
    assert_eq!(detail["jugadores"]["suplentes"], json!([]));

    let (status, positions) = send(app, Method::GET, "/api/posiciones", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(positions[0]["nombre"], "Portero");
}

#[tokio::test]
async fn test_health_check_reaches_the_store() {
    let app = build_router(setup_test_db().await);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
