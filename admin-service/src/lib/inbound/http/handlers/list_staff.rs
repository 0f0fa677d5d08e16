use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Account;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_staff<R: AccountRepository>(
    State(state): State<AppState<R>>,
) -> Result<ApiSuccess<Vec<StaffData>>, ApiError> {
    state
        .account_service
        .list_staff()
        .await
        .map_err(ApiError::from)
        .map(|staff| {
            ApiSuccess::new(
                StatusCode::OK,
                staff.iter().map(StaffData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
}

impl From<&Account> for StaffData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            name: account.name.clone(),
            email: account.email.as_str().to_string(),
            phone: account.phone.clone(),
            job_title: account.job_title.clone(),
        }
    }
}
