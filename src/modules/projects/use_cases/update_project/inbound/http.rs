use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::projects::core::project::ProjectView;
use crate::shared::infrastructure::project_store::ProjectPatch;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateProjectBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "invalid request body");
    };
    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return error_response(StatusCode::BAD_REQUEST, "name cannot be empty");
        }
    }

    let patch = ProjectPatch {
        name: body.name.map(|name| name.trim().to_string()),
        description: body.description,
        color: body.color,
    };

    match state.projects.update(id, user_id, patch).await {
        Ok(Some(project)) => Json(ProjectView::from_record(&project)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "project not found"),
        Err(err) => {
            tracing::error!(error = %err, "update project failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[cfg(test)]
mod update_project_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::patch,
    };
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::modules::projects::core::project::ProjectRecord;
    use crate::shared::core::clock::FixedClock;
    use crate::shared::infrastructure::project_store::ProjectStore;
    use crate::shell::state::{AppState, InMemoryApp};

    async fn make_test_app() -> (Router, InMemoryApp, Uuid) {
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
        ));
        let app = AppState::in_memory(clock);
        let user_id = Uuid::now_v7();
        app.sessions.issue("test-token", user_id).await;
        let router = Router::new()
            .route("/api/projects/{id}", patch(super::handle))
            .with_state(app.state.clone());
        (router, app, user_id)
    }

    async fn seed_project(app: &InMemoryApp, user_id: Uuid) -> Uuid {
        let id = Uuid::now_v7();
        app.projects
            .insert(ProjectRecord {
                id,
                user_id,
                name: "before".into(),
                description: Some("desc".into()),
                color: None,
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            })
            .await
            .unwrap();
        id
    }

    fn update_request(id: Uuid, body: &str) -> Request<Body> {
        Request::patch(format!("/api/projects/{id}"))
            .header("content-type", "application/json")
            .header("authorization", "Bearer test-token")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_apply_a_partial_update() {
        let (router, app, user_id) = make_test_app().await;
        let id = seed_project(&app, user_id).await;

        let response = router
            .oneshot(update_request(id, r#"{"name":"after"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "after");
        assert_eq!(json["description"], "desc", "untouched field survives");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_project() {
        let (router, _, _) = make_test_app().await;
        let response = router
            .oneshot(update_request(Uuid::now_v7(), r#"{"name":"after"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_404_for_another_users_project() {
        let (router, app, _) = make_test_app().await;
        let id = seed_project(&app, Uuid::now_v7()).await;
        let response = router
            .oneshot(update_request(id, r#"{"name":"after"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_reject_a_blank_name() {
        let (router, app, user_id) = make_test_app().await;
        let id = seed_project(&app, user_id).await;
        let response = router
            .oneshot(update_request(id, r#"{"name":"  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
