use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Password-reset request stub.
///
/// Responds 200 with one fixed body no matter what, so the endpoint can
/// never be used to enumerate registered emails. The service only logs
/// whether the account exists.
pub async fn forgot_password<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<ApiSuccess<ForgotPasswordResponseData>, ApiError> {
    state
        .account_service
        .request_password_reset(&body.email)
        .await;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ForgotPasswordResponseData {
            message: "If an account exists, a reset link has been sent.".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordRequest {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordResponseData {
    pub message: String,
}
