mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, send, setup_test_app, token_for};
use film_db::seed::seed_samples;
use film_models::Role;
use serde_json::json;

#[tokio::test]
async fn test_create_director_uses_birth_year_key() {
    let (app, _) = setup_test_app();
    let token = token_for(Role::User);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/directors",
            json!({"name": " Bong Joon-ho ", "birthYear": "1969"}),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Bong Joon-ho");
    assert_eq!(body["birthYear"], 1969);
    assert!(body.get("birth_year").is_none());
}

#[tokio::test]
async fn test_create_director_validation() {
    let (app, _) = setup_test_app();
    let token = token_for(Role::User);

    for payload in [
        json!({"name": "Tika"}),
        json!({"birthYear": 2006}),
        json!({"name": "   ", "birthYear": 2006}),
        json!({"name": "Tika", "birth_year": 2006}),
    ] {
        let (status, body) = send(&app, json_request("POST", "/directors", payload, Some(&token))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name dan birthYear wajib diisi");
    }
}

#[tokio::test]
async fn test_list_directors_sorted_by_name() {
    let (app, gateway) = setup_test_app();
    seed_samples(&gateway).await.unwrap();

    let (status, body) = send(&app, empty_request("GET", "/directors", None)).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Royyan", "Tika"]);
}

#[tokio::test]
async fn test_director_lifecycle() {
    let (app, _) = setup_test_app();
    let user_token = token_for(Role::User);
    let admin_token = token_for(Role::Admin);

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/directors",
            json!({"name": "Royyan", "birthYear": 2004}),
            Some(&user_token),
        ),
    )
    .await;
    let uri = format!("/directors/{}", created["id"].as_str().unwrap());

    let (status, fetched) = send(&app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let update = json!({"name": "Royyan A.", "birthYear": 2005});
    let (status, _) = send(&app, json_request("PUT", &uri, update.clone(), Some(&user_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = send(&app, json_request("PUT", &uri, update, Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Royyan A.");
    assert_eq!(updated["birthYear"], 2005);

    let (status, _) = send(&app, empty_request("DELETE", &uri, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, empty_request("DELETE", &uri, Some(&admin_token))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, empty_request("DELETE", &uri, Some(&admin_token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Sutradara tidak ditemukan");
}

#[tokio::test]
async fn test_malformed_director_id() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, empty_request("GET", "/directors/abc", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Format ID tidak valid");
}
