//! Integration tests for the game and ad endpoints.
//!
//! Run over the in-memory catalog store; no database is needed.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_ad, create_test_app, create_test_game, create_unavailable_app, get_request,
    json_request, parse_response_body, raw_json_request, valid_ad_body,
};
use serde_json::json;
use tower::ServiceExt;

// ============================================================================
// Games
// ============================================================================

#[tokio::test]
async fn test_create_game_success() {
    let (app, _store) = create_test_app();

    let game = create_test_game(&app, "Valorant").await;

    assert_eq!(game["title"], "Valorant");
    assert_eq!(game["bannerUrl"], "https://cdn.example.com/Valorant.png");
    assert!(uuid::Uuid::parse_str(game["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_game_missing_fields() {
    let (app, _store) = create_test_app();

    let request = json_request(Method::POST, "/api/v1/games", json!({}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([
            {"field": "game", "message": "Informe o nome do game"},
            {"field": "bannerUrl", "message": "Informe a foto de capa do game"}
        ])
    );
}

#[tokio::test]
async fn test_list_games_with_ad_counts() {
    let (app, _store) = create_test_app();
    let valorant = create_test_game(&app, "Valorant").await;
    create_test_game(&app, "Dota 2").await;

    let game_id = valorant["id"].as_str().unwrap();
    create_test_ad(&app, game_id, valid_ad_body()).await;
    create_test_ad(&app, game_id, valid_ad_body()).await;

    let response = app.oneshot(get_request("/api/v1/games")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let games = body.as_array().unwrap();
    assert_eq!(games.len(), 2);

    let count_for = |title: &str| {
        games
            .iter()
            .find(|g| g["title"] == title)
            .map(|g| g["adCount"].clone())
            .unwrap()
    };
    assert_eq!(count_for("Valorant"), 2);
    assert_eq!(count_for("Dota 2"), 0);
}

// ============================================================================
// Ads
// ============================================================================

#[tokio::test]
async fn test_publish_and_list_ad_flow() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;
    let game_id = game["id"].as_str().unwrap();

    let ad = create_test_ad(&app, game_id, valid_ad_body()).await;

    // The creation response carries the stored form.
    assert_eq!(ad["gameId"], game_id);
    assert_eq!(ad["weekDays"], "1,3,5");
    assert_eq!(ad["hourStart"], 480);
    assert_eq!(ad["hourEnd"], 1080);
    assert_eq!(ad["discord"], "diego#1234");
    assert!(ad.get("createdAt").is_some());

    let records = store.ad_records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].week_days, "1,3,5");
    assert_eq!(records[0].hour_start, 480);
    assert_eq!(records[0].hour_end, 1080);

    let response = app
        .oneshot(get_request(&format!("/api/v1/games/{}/ads", game_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([{
            "id": ad["id"],
            "name": "Diego",
            "weekDays": ["1", "3", "5"],
            "useVoiceChannel": true,
            "yearsPlaying": 3,
            "hourStart": "08:00",
            "hourEnd": "18:00"
        }])
    );
}

#[tokio::test]
async fn test_listing_never_exposes_discord() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;
    let game_id = game["id"].as_str().unwrap();
    create_test_ad(&app, game_id, valid_ad_body()).await;

    let response = app
        .oneshot(get_request(&format!("/api/v1/games/{}/ads", game_id)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    let listing = &body[0];
    assert!(listing.get("discord").is_none());
    assert!(listing.get("gameId").is_none());
    assert!(listing.get("createdAt").is_none());
}

#[tokio::test]
async fn test_listing_newest_first() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;
    let game_id = game["id"].as_str().unwrap();

    for name in ["first", "second", "third"] {
        let mut body = valid_ad_body();
        body["name"] = json!(name);
        create_test_ad(&app, game_id, body).await;
    }

    let response = app
        .oneshot(get_request(&format!("/api/v1/games/{}/ads", game_id)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|ad| ad["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_listing_only_includes_requested_game() {
    let (app, _store) = create_test_app();
    let valorant = create_test_game(&app, "Valorant").await;
    let dota = create_test_game(&app, "Dota 2").await;
    create_test_ad(&app, valorant["id"].as_str().unwrap(), valid_ad_body()).await;

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/games/{}/ads",
            dota["id"].as_str().unwrap()
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));
}

#[tokio::test]
async fn test_listing_for_malformed_game_id_is_empty() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/games/not-a-uuid/ads"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));
}

#[tokio::test]
async fn test_create_ad_trims_name() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let mut body = valid_ad_body();
    body["name"] = json!("  Diego  ");
    let ad = create_test_ad(&app, game["id"].as_str().unwrap(), body).await;

    assert_eq!(ad["name"], "Diego");
    assert_eq!(store.ad_records().await[0].name, "Diego");
}

#[tokio::test]
async fn test_create_ad_reports_every_missing_field_in_order() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        json!({}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([
            {"field": "name", "message": "Informe um nome!"},
            {"field": "yearsPlaying", "message": "Informe quantos anos que joga"},
            {"field": "discord", "message": "Informe o discord"},
            {"field": "weekDays", "message": "Informe o dia que costuma jogar"},
            {"field": "hourStart", "message": "Informe a hora início"},
            {"field": "hourEnd", "message": "Informe a hora término"},
            {"field": "useVoiceChannel", "message": "Informe se usa o chat de voz"}
        ])
    );
    assert!(store.ad_records().await.is_empty());
}

#[tokio::test]
async fn test_create_ad_rejects_blank_values() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let mut body = valid_ad_body();
    body["name"] = json!("   ");
    body["yearsPlaying"] = json!(0);
    body["weekDays"] = json!([]);

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        body,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    let fields: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["name", "yearsPlaying", "weekDays"]);
    assert!(store.ad_records().await.is_empty());
}

#[tokio::test]
async fn test_create_ad_malformed_game_id() {
    let (app, _store) = create_test_app();

    let request = json_request(Method::POST, "/api/v1/games/abc/ads", valid_ad_body());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!([{"field": "gameId", "message": "Informe o game"}]));
}

#[tokio::test]
async fn test_create_ad_unknown_game() {
    let (app, store) = create_test_app();

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", uuid::Uuid::new_v4()),
        valid_ad_body(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
    assert!(store.ad_records().await.is_empty());
}

#[tokio::test]
async fn test_create_ad_unreadable_hour() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let mut body = valid_ad_body();
    body["hourStart"] = json!("ab:cd");
    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        body,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([{"field": "hourStart", "message": "Informe a hora início"}])
    );
    assert!(store.ad_records().await.is_empty());
}

#[tokio::test]
async fn test_create_ad_out_of_range_hour_round_trips() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;
    let game_id = game["id"].as_str().unwrap();

    let mut body = valid_ad_body();
    body["hourStart"] = json!("25:00");
    body["hourEnd"] = json!("23:59");
    let ad = create_test_ad(&app, game_id, body).await;
    assert_eq!(ad["hourStart"], 1500);
    assert_eq!(ad["hourEnd"], 1439);

    let response = app
        .oneshot(get_request(&format!("/api/v1/games/{}/ads", game_id)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body[0]["hourStart"], "25:00");
    assert_eq!(body[0]["hourEnd"], "23:59");
}

#[tokio::test]
async fn test_create_ad_malformed_body() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let request = raw_json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        "{not json",
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["field"], "body");
}

#[tokio::test]
async fn test_create_ad_mistyped_field_reported_with_the_rest() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        json!({
            "name": "",
            "discord": 123,
            "yearsPlaying": 0,
            "weekDays": [],
            "hourStart": "",
            "hourEnd": "",
            "useVoiceChannel": true
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([
            {"field": "name", "message": "Informe um nome!"},
            {"field": "yearsPlaying", "message": "Informe quantos anos que joga"},
            {"field": "discord", "message": "Informe o discord"},
            {"field": "weekDays", "message": "Informe o dia que costuma jogar"},
            {"field": "hourStart", "message": "Informe a hora início"},
            {"field": "hourEnd", "message": "Informe a hora término"}
        ])
    );
    assert!(store.ad_records().await.is_empty());
}

#[tokio::test]
async fn test_create_ad_wrong_field_type() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let mut body = valid_ad_body();
    body["yearsPlaying"] = json!("three");
    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        body,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!([{"field": "yearsPlaying", "message": "Informe quantos anos que joga"}])
    );
}

#[tokio::test]
async fn test_create_ad_integral_float_years_playing() {
    let (app, store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let mut body = valid_ad_body();
    body["yearsPlaying"] = json!(2.0);
    let ad = create_test_ad(&app, game["id"].as_str().unwrap(), body).await;

    assert_eq!(ad["yearsPlaying"], 2);
    assert_eq!(store.ad_records().await[0].years_playing, 2);
}

#[tokio::test]
async fn test_create_ad_body_not_an_object() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", game["id"].as_str().unwrap()),
        json!([1, 2, 3]),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["field"], "body");
}

// ============================================================================
// Discord lookup
// ============================================================================

#[tokio::test]
async fn test_get_ad_discord() {
    let (app, _store) = create_test_app();
    let game = create_test_game(&app, "Valorant").await;
    let ad = create_test_ad(&app, game["id"].as_str().unwrap(), valid_ad_body()).await;

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/ads/{}/discord",
            ad["id"].as_str().unwrap()
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        parse_response_body(response).await,
        json!({"discord": "diego#1234"})
    );
}

#[tokio::test]
async fn test_get_ad_discord_unknown_ad() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/ads/{}/discord",
            uuid::Uuid::new_v4()
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_ad_discord_malformed_id() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/ads/not-a-uuid/discord"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}

// ============================================================================
// Storage failures
// ============================================================================

#[tokio::test]
async fn test_storage_outage_is_internal_error() {
    let app = create_unavailable_app();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/games"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "An internal error occurred");

    let request = json_request(
        Method::POST,
        &format!("/api/v1/games/{}/ads", uuid::Uuid::new_v4()),
        valid_ad_body(),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _store) = create_test_app();

    let response = app.oneshot(get_request("/api/v1/games")).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
