use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::models::EmailAddress;
use crate::account::models::UpdateContactCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn update_own_profile<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Extension(account): Extension<AuthenticatedAccount>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<UpdateProfileResponseData>, ApiError> {
    state
        .account_service
        .update_staff_profile(account.id, body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UpdateProfileResponseData {
            message: "Profile updated successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    name: String,
    email: String,
    phone: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateProfileRequestError {
    #[error("Name, email, and phone are required")]
    MissingField,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateContactCommand, ParseUpdateProfileRequestError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(ParseUpdateProfileRequestError::MissingField);
        }

        Ok(UpdateContactCommand {
            name: self.name,
            email: EmailAddress::new(self.email)?,
            phone: self.phone,
        })
    }
}

impl From<ParseUpdateProfileRequestError> for ApiError {
    fn from(err: ParseUpdateProfileRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProfileResponseData {
    pub message: String,
}
