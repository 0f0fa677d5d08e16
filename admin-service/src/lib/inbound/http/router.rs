use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_staff::create_staff;
use super::handlers::delete_staff::delete_staff;
use super::handlers::forgot_password::forgot_password;
use super::handlers::get_own_profile::get_own_profile;
use super::handlers::list_staff::list_staff;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_own_profile::update_own_profile;
use super::handlers::update_staff::update_staff;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::account::ports::AccountRepository;
use crate::account::service::AccountService;

/// Shared handler state. Generic over the repository so integration tests
/// can run the full router against a test double.
pub struct AppState<R: AccountRepository> {
    pub account_service: Arc<AccountService<R>>,
    pub authenticator: Arc<Authenticator>,
}

impl<R: AccountRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<R: AccountRepository>(
    account_service: Arc<AccountService<R>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        account_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<R>))
        .route("/api/auth/login", post(login::<R>))
        .route("/api/auth/forgot-password", post(forgot_password::<R>));

    // Admin-only staff management
    let admin_routes = Router::new()
        .route("/api/staff", post(create_staff::<R>).get(list_staff::<R>))
        .route(
            "/api/staff/:id",
            put(update_staff::<R>).delete(delete_staff::<R>),
        )
        .route_layer(middleware::from_fn(require_admin));

    // Any authenticated principal may manage their own staff profile
    let profile_routes = Router::new().route(
        "/api/staff/me",
        get(get_own_profile::<R>).put(update_own_profile::<R>),
    );

    let protected_routes = admin_routes.merge(profile_routes).route_layer(
        middleware::from_fn_with_state(state.clone(), authenticate::<R>),
    );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
