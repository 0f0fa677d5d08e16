use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Account;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn get_own_profile<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    state
        .account_service
        .get_staff_profile(account.id)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub role: String,
}

impl From<&Account> for ProfileData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            name: account.name.clone(),
            email: account.email.as_str().to_string(),
            phone: account.phone.clone(),
            job_title: account.job_title.clone(),
            role: account.role.to_string(),
        }
    }
}
