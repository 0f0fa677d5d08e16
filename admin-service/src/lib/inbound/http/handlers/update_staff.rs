use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::models::AccountId;
use crate::account::models::EmailAddress;
use crate::account::models::UpdateStaffCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_staff<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStaffRequest>,
) -> Result<ApiSuccess<UpdateStaffResponseData>, ApiError> {
    state
        .account_service
        .update_staff(AccountId(id), body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UpdateStaffResponseData {
            message: "Staff updated successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateStaffRequest {
    name: String,
    email: String,
    phone: String,
    job_title: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateStaffRequestError {
    #[error("Name, email, phone, and job title are required")]
    MissingField,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateStaffRequest {
    fn try_into_command(self) -> Result<UpdateStaffCommand, ParseUpdateStaffRequestError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.job_title.trim().is_empty()
        {
            return Err(ParseUpdateStaffRequestError::MissingField);
        }

        Ok(UpdateStaffCommand {
            name: self.name,
            email: EmailAddress::new(self.email)?,
            phone: self.phone,
            job_title: self.job_title,
        })
    }
}

impl From<ParseUpdateStaffRequestError> for ApiError {
    fn from(err: ParseUpdateStaffRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStaffResponseData {
    pub message: String,
}
