use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::models::CreateStaffCommand;
use crate::account::models::EmailAddress;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_staff<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<CreateStaffRequest>,
) -> Result<ApiSuccess<CreateStaffResponseData>, ApiError> {
    let id = state
        .account_service
        .create_staff(body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        CreateStaffResponseData {
            message: "Staff added successfully".to_string(),
            id: id.0,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateStaffRequest {
    name: String,
    email: String,
    phone: String,
    job_title: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateStaffRequestError {
    #[error("Name, email, phone, and job title are required")]
    MissingField,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl CreateStaffRequest {
    fn try_into_command(self) -> Result<CreateStaffCommand, ParseCreateStaffRequestError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.job_title.trim().is_empty()
        {
            return Err(ParseCreateStaffRequestError::MissingField);
        }

        Ok(CreateStaffCommand {
            name: self.name,
            email: EmailAddress::new(self.email)?,
            phone: self.phone,
            job_title: self.job_title,
        })
    }
}

impl From<ParseCreateStaffRequestError> for ApiError {
    fn from(err: ParseCreateStaffRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateStaffResponseData {
    pub message: String,
    pub id: i64,
}
