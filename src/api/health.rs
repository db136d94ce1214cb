//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
/// Checks if the service can handle requests
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let account_store = check_account_store(&state).await;
    let overall_status = account_store.status;

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![account_store]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_account_store(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    let (status, message) = match state.account_repository.ping().await {
        Ok(()) => (HealthStatus::Healthy, None),
        Err(e) => {
            warn!(error = %e, "Account store unreachable");
            (HealthStatus::Unhealthy, Some("account store unreachable".to_string()))
        }
    };

    HealthCheck {
        name: "account_store".to_string(),
        status,
        message,
        latency_ms: Some(start.elapsed().as_millis() as u64),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::Request,
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::create_router_with_state;
    use crate::domain::account::MockAccountRepository;
    use crate::domain::{AccountRepository, AdminTeam, DomainError};
    use crate::infrastructure::account::InMemoryAccountRepository;
    use crate::infrastructure::auth::{JwtConfig, JwtService};
    use crate::infrastructure::invitation::InMemoryInvitationRepository;
    use crate::infrastructure::team::TeamViewService;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn app(accounts: Arc<dyn AccountRepository>) -> Router {
        let service = TeamViewService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryInvitationRepository::new()),
            AdminTeam::new("admin"),
        );
        let jwt = JwtService::new(JwtConfig::new("test-secret", 1));

        create_router_with_state(AppState::new(accounts, Arc::new(service), Arc::new(jwt)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[tokio::test]
    async fn test_health_and_live() {
        let app = app(Arc::new(InMemoryAccountRepository::new()));

        let (status, body) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"healthy\""));
        assert!(!body.contains("checks"));

        let (status, _) = get(app, "/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_when_store_reachable() {
        let (status, body) = get(app(Arc::new(InMemoryAccountRepository::new())), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("account_store"));
    }

    #[tokio::test]
    async fn test_not_ready_when_store_unreachable() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_ping()
            .returning(|| Err(DomainError::storage("pool timed out")));

        let (status, body) = get(app(Arc::new(accounts)), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("\"unhealthy\""));
        assert!(!body.contains("pool timed out"));
    }
}
