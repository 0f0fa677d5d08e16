use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::AccountId;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_staff<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<DeleteStaffResponseData>, ApiError> {
    state
        .account_service
        .delete_staff(AccountId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteStaffResponseData {
                    message: "Staff deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStaffResponseData {
    pub message: String,
}
