// Request identity.
//
// Session issuance lives outside this service; the extractor resolves the
// bearer token to a user id through the SessionStore port and rejects
// everything else with 401.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::Response,
};
use uuid::Uuid;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub struct AuthenticatedUser(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Not authenticated",
            ));
        };

        match state.sessions.user_id_for_token(token).await {
            Ok(Some(user_id)) => Ok(Self(user_id)),
            Ok(None) => Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Not authenticated",
            )),
            Err(err) => {
                tracing::error!(error = %err, "session lookup failed");
                Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                ))
            }
        }
    }
}

#[cfg(test)]
mod auth_extractor_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::shared::core::clock::FixedClock;
    use crate::shell::state::AppState;

    use super::AuthenticatedUser;

    async fn whoami(AuthenticatedUser(user_id): AuthenticatedUser) -> String {
        user_id.to_string()
    }

    async fn make_test_app() -> (Router, Uuid) {
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
        ));
        let app = AppState::in_memory(clock);
        let user_id = Uuid::now_v7();
        app.sessions.issue("test-token", user_id).await;
        let router = Router::new()
            .route("/whoami", get(whoami))
            .with_state(app.state);
        (router, user_id)
    }

    #[tokio::test]
    async fn it_should_resolve_a_valid_bearer_token() {
        let (router, user_id) = make_test_app().await;
        let response = router
            .oneshot(
                Request::get("/whoami")
                    .header("authorization", "Bearer test-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(bytes, user_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn it_should_reject_a_missing_header() {
        let (router, _) = make_test_app().await;
        let response = router
            .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_reject_an_unknown_token() {
        let (router, _) = make_test_app().await;
        let response = router
            .oneshot(
                Request::get("/whoami")
                    .header("authorization", "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_reject_a_non_bearer_scheme() {
        let (router, _) = make_test_app().await;
        let response = router
            .oneshot(
                Request::get("/whoami")
                    .header("authorization", "Basic dGVzdA==")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
