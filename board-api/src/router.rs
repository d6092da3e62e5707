use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, config: &ApplicationSettings) -> Router<()> {
    let mut api = Router::new().nest("/entries", routes::entries::router());

    if config.seed_enabled {
        tracing::warn!("seed endpoint enabled at /api/seed");
        api = api.nest("/seed", routes::seed::router());
    }

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(routes::pages::router())
        .nest("/api", api);

    // Only the configured app origin may call the JSON API cross-site
    let app_url = config.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _| origin.to_str().unwrap_or_default() == app_url,
        ));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::inbound::http::EntryResponse, domain::models::EntryStatus};
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    fn settings(seed_enabled: bool) -> ApplicationSettings {
        ApplicationSettings {
            port: 8080,
            host: "127.0.0.1".to_string(),
            app_url: "http://localhost:8080".to_string(),
            seed_enabled,
        }
    }

    fn test_app() -> (Router, AppState) {
        let state = AppState::in_memory();
        (create(state.clone(), &settings(false)), state)
    }

    async fn body_string(response: Response) -> String {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    fn json_request(method: Method, uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request")
    }

    fn form_request(uri: &str, form: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request")
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .expect("location header")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _state) = test_app();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn api_crud_round() {
        let (app, _state) = test_app();

        let created = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/entries",
                serde_json::json!({ "description": "Review pull request" }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: EntryResponse = serde_json::from_str(&body_string(created).await).unwrap();
        assert_eq!(created.status, EntryStatus::Pending);

        let moved = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/entries/{}", created.id),
                serde_json::json!({ "status": "in-progress" }),
            ))
            .await
            .unwrap();
        assert_eq!(moved.status(), StatusCode::OK);
        let moved: EntryResponse = serde_json::from_str(&body_string(moved).await).unwrap();
        assert_eq!(moved.status, EntryStatus::InProgress);
        assert_eq!(moved.description, "Review pull request");

        let listed = app
            .clone()
            .oneshot(Request::get("/api/entries").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed: Vec<EntryResponse> =
            serde_json::from_str(&body_string(listed).await).unwrap();
        assert_eq!(listed, vec![moved.clone()]);

        let deleted = app
            .clone()
            .oneshot(
                Request::delete(format!("/api/entries/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);

        let missing = app
            .oneshot(
                Request::get(format!("/api/entries/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_rejects_bad_input() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("existing".into())
            .await
            .unwrap();

        let invalid_id = app
            .clone()
            .oneshot(Request::get("/api/entries/not-an-id").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(invalid_id.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(invalid_id).await.contains("\"error\""));

        let invalid_status = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/entries/{}", entry.id),
                serde_json::json!({ "status": "archived" }),
            ))
            .await
            .unwrap();
        assert_eq!(invalid_status.status(), StatusCode::BAD_REQUEST);

        let blank = app
            .oneshot(json_request(
                Method::POST,
                "/api/entries",
                serde_json::json!({ "description": "  " }),
            ))
            .await
            .unwrap();
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

        let unchanged = state.entry_service.get_entry(&entry.id).await.unwrap();
        assert_eq!(unchanged, Some(entry));
    }

    #[tokio::test]
    async fn entry_page_redirects_home_when_missing() {
        let (app, _state) = test_app();

        for uri in ["/entries/42", "/entries/not-an-id"] {
            let response = app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
            assert_eq!(location(&response), "/");
        }
    }

    #[tokio::test]
    async fn entry_page_renders_the_form() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("Fix the leaking tap".into())
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get(format!("/entries/{}", entry.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains(r#"value="pending" checked"#));
        assert!(page.contains(&ammonia::clean_text("Fix the leaking tap")));
    }

    #[tokio::test]
    async fn saving_a_blank_description_keeps_the_entry() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("Original".into())
            .await
            .unwrap();

        let response = app
            .oneshot(form_request(
                &format!("/entries/{}", entry.id),
                "description=+++&status=finished",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_string(response).await.contains(r#"class="field error""#));
        assert_eq!(
            state.entry_service.get_entry(&entry.id).await.unwrap(),
            Some(entry)
        );
    }

    #[tokio::test]
    async fn saving_updates_the_entry_and_flashes() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("Original".into())
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_request(
                &format!("/entries/{}", entry.id),
                "description=Rewritten%0Awith+two+lines&status=finished",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("flash cookie");
        assert!(cookie.starts_with("flash=entry-updated"));

        let saved = state
            .entry_service
            .get_entry(&entry.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.description, "Rewritten\nwith two lines");
        assert_eq!(saved.status, EntryStatus::Finished);

        let board = app
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, "flash=entry-updated")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(board
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|c| c.starts_with("flash=;")));
        let page = body_string(board).await;
        assert!(page.contains(&ammonia::clean_text("Entry updated")));
        assert!(page.contains(r#"data-entry-id="1""#));
    }

    #[tokio::test]
    async fn saving_an_unknown_status_is_a_bad_request() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("Original".into())
            .await
            .unwrap();

        let response = app
            .oneshot(form_request(
                &format!("/entries/{}", entry.id),
                "description=Edited&status=archived",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn board_form_creates_and_delete_form_removes() {
        let (app, state) = test_app();

        let created = app
            .clone()
            .oneshot(form_request("/entries", "description=Buy+groceries"))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::SEE_OTHER);

        let entries = state.entry_service.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "Buy groceries");

        let blank = app
            .clone()
            .oneshot(form_request("/entries", "description="))
            .await
            .unwrap();
        assert_eq!(blank.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.entry_service.list_entries().await.unwrap().len(), 1);

        let deleted = app
            .oneshot(form_request(
                &format!("/entries/{}/delete", entries[0].id),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
        assert!(state.entry_service.list_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_is_only_routed_when_enabled() {
        let (app, _state) = test_app();
        let disabled = app
            .oneshot(Request::post("/api/seed").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(disabled.status(), StatusCode::NOT_FOUND);

        let state = AppState::in_memory();
        let app = create(state.clone(), &settings(true));
        let enabled = app
            .oneshot(Request::post("/api/seed").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(enabled.status(), StatusCode::OK);

        let statuses: Vec<_> = state
            .entry_service
            .list_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.status)
            .collect();
        assert_eq!(statuses, EntryStatus::ALL);
    }

    #[tokio::test]
    async fn saving_a_missing_entry_sends_the_browser_back_to_the_board() {
        let (app, _state) = test_app();

        for uri in ["/entries/999", "/entries/not-an-id"] {
            let response = app
                .clone()
                .oneshot(form_request(uri, "description=Edited&status=finished"))
                .await
                .unwrap();

            // 303 so the browser follows with a GET instead of replaying the POST.
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), "/");
        }
    }

    #[tokio::test]
    async fn deleting_a_missing_entry_from_the_page_redirects_home() {
        let (app, _state) = test_app();

        for uri in ["/entries/999/delete", "/entries/not-an-id/delete"] {
            let response = app.clone().oneshot(form_request(uri, "")).await.unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), "/");
        }
    }

    #[tokio::test]
    async fn api_delete_of_missing_entry_is_not_found() {
        let (app, _state) = test_app();

        let response = app
            .oneshot(Request::delete("/api/entries/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("\"error\""));
    }

    #[tokio::test]
    async fn api_malformed_bodies_are_bad_requests_with_error_json() {
        let (app, state) = test_app();
        let entry = state
            .entry_service
            .create_entry("existing".into())
            .await
            .unwrap();

        let wrong_status_type = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/entries/{}", entry.id),
                serde_json::json!({ "status": 3 }),
            ))
            .await
            .unwrap();
        assert_eq!(wrong_status_type.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(wrong_status_type).await).unwrap();
        assert!(body["error"].is_string());

        let wrong_description_type = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/entries",
                serde_json::json!({ "description": 5 }),
            ))
            .await
            .unwrap();
        assert_eq!(wrong_description_type.status(), StatusCode::BAD_REQUEST);

        let missing_content_type = app
            .oneshot(
                Request::post("/api/entries")
                    .body(Body::from(r#"{"description":"no header"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing_content_type.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(missing_content_type).await.contains("\"error\""));

        assert_eq!(state.entry_service.list_entries().await.unwrap(), vec![entry]);
    }
}
