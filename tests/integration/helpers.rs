//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use linkvault_api::state::AppState;
use linkvault_auth::jwt::decoder::JwtDecoder;
use linkvault_auth::jwt::encoder::JwtEncoder;
use linkvault_auth::password::PasswordHasher;
use linkvault_auth::service::AuthService;
use linkvault_core::config::auth::AuthConfig;
use linkvault_core::config::database::DatabaseConfig;
use linkvault_core::config::logging::LoggingConfig;
use linkvault_core::config::server::ServerConfig;
use linkvault_core::config::AppConfig;
use linkvault_database::memory::{MemoryBookmarkStore, MemoryUserStore};

/// A parsed response from the test router.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` for empty bodies).
    pub body: Value,
}

/// Test application context: the full router over in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let config = test_config();
        config.auth.validate().expect("test auth config is valid");

        let user_store = Arc::new(MemoryUserStore::new());
        let bookmark_store = Arc::new(MemoryBookmarkStore::new());

        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let auth_service = Arc::new(AuthService::new(
            user_store.clone(),
            PasswordHasher::new(),
            JwtEncoder::new(&config.auth),
        ));

        let state = AppState {
            config: Arc::new(config),
            user_store,
            bookmark_store,
            jwt_decoder,
            auth_service,
        };

        Self {
            router: linkvault_api::build_router(state),
        }
    }

    /// Issue a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is JSON")
        };

        TestResponse { status, body }
    }

    /// Sign up a user and return (access_token, refresh_token).
    pub async fn signup(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        tokens_from(&response.body)
    }
}

/// Pull both tokens out of a token response body.
pub fn tokens_from(body: &Value) -> (String, String) {
    let access = body
        .get("access_token")
        .and_then(Value::as_str)
        .expect("access_token present")
        .to_string();
    let refresh = body
        .get("refresh_token")
        .and_then(Value::as_str)
        .expect("refresh_token present")
        .to_string();
    (access, refresh)
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: Default::default(),
        },
        database: DatabaseConfig {
            url: "postgres://unused-in-memory-tests".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            access_secret: "integration-access-secret".to_string(),
            refresh_secret: "integration-refresh-secret".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
        },
        logging: LoggingConfig::default(),
    }
}
