use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::models::AccountId;
use crate::account::models::Role;
use crate::account::ports::AccountRepository;
use crate::inbound::http::router::AppState;

/// Verified claims attached to the request after the gate passes.
///
/// Downstream handlers read this from request extensions; it is the only
/// way identity reaches them.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub email: String,
    pub role: Role,
}

/// Access gate: verifies the bearer token and attaches the claims.
///
/// Per-request state machine: no token -> 401, bad signature or expired
/// -> 401, unparseable claims -> 401, otherwise the request proceeds with
/// `AuthenticatedAccount` in its extensions. Stateless; nothing is looked
/// up server-side.
pub async fn authenticate<R: AccountRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    // Claims are only trusted once both fields parse back into domain types
    let id = claims.account_id().ok_or_else(|| {
        tracing::warn!("Token subject is not an account id");
        unauthorized("Invalid token format")
    })?;

    let role: Role = claims.role.parse().map_err(|_| {
        tracing::warn!(role = %claims.role, "Token carries unknown role");
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        id: AccountId(id),
        email: claims.email,
        role,
    });

    Ok(next.run(req).await)
}

/// Role check for the admin-only staff-management surface.
///
/// Runs after `authenticate`, so the extension is always present on a
/// well-formed route stack.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let account = req
        .extensions()
        .get::<AuthenticatedAccount>()
        .ok_or_else(|| {
            tracing::error!("require_admin ran without an authenticated account");
            unauthorized("Authentication required")
        })?;

    if account.role != Role::Admin {
        tracing::debug!(account_id = %account.id, role = %account.role, "Admin route refused");
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "Admin role required"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
