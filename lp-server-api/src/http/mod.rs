use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use lp_server_app::Application;
use tower_http::cors::CorsLayer;

mod leaderboard;
mod matches;
mod players;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    let router: Router<AppState> = Router::new().nest(
        "/v1",
        Router::new()
            .route(
                "/players",
                post(players::register_player).get(players::list_players),
            )
            .route(
                "/players/{name}",
                get(players::get_standing).put(players::update_standing),
            )
            .route(
                "/matches",
                post(matches::log_match).get(matches::get_statistics),
            )
            .route("/leaderboard", get(leaderboard::get_leaderboard)),
    );

    router
        .layer(CorsLayer::permissive())
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    port: u16,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    info!("API server listening on port {}", port);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use lp_core::LadderPolicy;
    use lp_server_app::{build_application, domain::memory::InMemoryLadderRepository};
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        let repo = Arc::new(InMemoryLadderRepository::new());
        router(Arc::new(build_application(
            repo.clone(),
            repo,
            LadderPolicy::PromotionOnly,
        )))
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();
        let resp = router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn register(router: &Router, name: &str, rank: &str, division: &str, lp: u32) {
        let (status, _) = send(
            router,
            "POST",
            "/v1/players",
            Some(json!({
                "player_name": name,
                "rank": rank,
                "division": division,
                "current_lp": lp,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_register_and_get_standing() {
        let router = test_router();
        register(&router, "Faker", "Iron", "IV", 90).await;

        let (status, body) = send(&router, "GET", "/v1/players/Faker", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "player_name": "Faker",
                "rank": "Iron",
                "division": "IV",
                "current_lp": 90,
            })
        );

        let (status, body) = send(&router, "GET", "/v1/players", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Faker"]));
    }

    #[tokio::test]
    async fn test_register_errors() {
        let router = test_router();
        register(&router, "Faker", "Iron", "IV", 90).await;

        let duplicate = json!({
            "player_name": "Faker",
            "rank": "Gold",
            "division": "I",
            "current_lp": 0,
        });
        let (status, body) = send(&router, "POST", "/v1/players", Some(duplicate)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("Faker"));

        let bad_rank = json!({
            "player_name": "Deft",
            "rank": "Wood",
            "division": "I",
            "current_lp": 0,
        });
        let (status, _) = send(&router, "POST", "/v1/players", Some(bad_rank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let bad_lp = json!({
            "player_name": "Deft",
            "rank": "Gold",
            "division": "I",
            "current_lp": 150,
        });
        let (status, _) = send(&router, "POST", "/v1/players", Some(bad_lp)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&router, "GET", "/v1/players/Deft", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_json_bad_requests() {
        let router = test_router();
        register(&router, "Faker", "Iron", "IV", 90).await;

        let negative_lp = json!({
            "player_name": "Deft",
            "rank": "Gold",
            "division": "I",
            "current_lp": -5,
        });
        let (status, body) = send(&router, "POST", "/v1/players", Some(negative_lp)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let negative_change = json!({ "player_name": "Faker", "result": "Win", "lp_change": -20 });
        let (status, body) = send(&router, "POST", "/v1/matches", Some(negative_change)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let missing_fields = json!({ "rank": "Gold" });
        let (status, body) =
            send(&router, "PUT", "/v1/players/Faker", Some(missing_fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(&router, "GET", "/v1/players/Faker", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_lp"], 90);
        let (_, body) = send(&router, "GET", "/v1/matches", None).await;
        assert_eq!(body["logs"], json!([]));
    }

    #[tokio::test]
    async fn test_challenger_outside_division_one_is_rejected() {
        let router = test_router();
        let apex = json!({
            "player_name": "Apex",
            "rank": "Challenger",
            "division": "IV",
            "current_lp": 100,
        });
        let (status, body) = send(&router, "POST", "/v1/players", Some(apex)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Challenger"));
    }

    #[tokio::test]
    async fn test_update_standing() {
        let router = test_router();
        register(&router, "Faker", "Iron", "IV", 90).await;

        let correction = json!({ "rank": "Diamond", "division": "II", "current_lp": 44 });
        let (status, body) =
            send(&router, "PUT", "/v1/players/Faker", Some(correction.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rank"], "Diamond");
        assert_eq!(body["current_lp"], 44);

        let (status, _) = send(&router, "PUT", "/v1/players/Nobody", Some(correction)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_log_match_and_statistics() {
        let router = test_router();
        register(&router, "Faker", "Iron", "IV", 90).await;

        let (status, body) = send(
            &router,
            "POST",
            "/v1/matches",
            Some(json!({ "player_name": "Faker", "result": "Win", "lp_change": 20 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["total_lp"], 10);
        assert_eq!(body["division"], "III");

        let (status, body) = send(
            &router,
            "POST",
            "/v1/matches",
            Some(json!({ "player_name": "Faker", "result": "Lose" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["lp_change"], 0);

        let (status, _) = send(
            &router,
            "POST",
            "/v1/matches",
            Some(json!({ "player_name": "Faker", "result": "Draw", "lp_change": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &router,
            "POST",
            "/v1/matches",
            Some(json!({ "player_name": "Nobody", "result": "Win", "lp_change": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&router, "GET", "/v1/matches", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["logs"].as_array().unwrap().len(), 2);
        assert_eq!(body["logs"][0]["result"], "Lose");
        assert_eq!(body["total_lp_change"], 20);
        assert_eq!(body["total_lp_change_display"], "+20");
    }

    #[tokio::test]
    async fn test_leaderboard() {
        let router = test_router();
        for name in ["A", "B", "C"] {
            register(&router, name, "Silver", "IV", 50).await;
        }
        for (name, result, lp) in [("A", "Win", 30), ("A", "Win", 20), ("B", "Win", 50), ("C", "Lose", 10)] {
            let (status, _) = send(
                &router,
                "POST",
                "/v1/matches",
                Some(json!({ "player_name": name, "result": result, "lp_change": lp })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&router, "GET", "/v1/leaderboard", None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["rows"].as_array().unwrap();
        let summary: Vec<(String, u64, String)> = rows
            .iter()
            .map(|r| {
                (
                    r["player_name"].as_str().unwrap().to_string(),
                    r["position"].as_u64().unwrap(),
                    r["lp_gained_lost"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("A".to_string(), 1, "+50".to_string()),
                ("B".to_string(), 2, "+50".to_string()),
                ("C".to_string(), 3, "-10".to_string()),
            ]
        );
        assert_eq!(body["podium"]["first"]["player_name"], "A");
        assert_eq!(body["podium"]["third"]["player_name"], "C");
    }

    #[tokio::test]
    async fn test_empty_leaderboard_has_empty_podium() {
        let router = test_router();
        let (status, body) = send(&router, "GET", "/v1/leaderboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], json!([]));
        assert_eq!(body["podium"]["first"], Value::Null);
    }
}
