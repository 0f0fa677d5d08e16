use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateStaffCommand;
use crate::account::models::LoginCommand;
use crate::account::models::LoginOutcome;
use crate::account::models::NewAccount;
use crate::account::models::RegisterCommand;
use crate::account::models::Role;
use crate::account::models::UpdateContactCommand;
use crate::account::models::UpdateStaffCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Length of the generated default password for new staff accounts.
const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Domain service for registration, login, and the staff surface.
///
/// The only component with business logic; everything else is either the
/// injected store or the auth primitives. Password hashing and
/// verification are CPU-bound and run on the blocking pool so one
/// expensive hash cannot stall unrelated requests.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AccountError::Credential(e.to_string()))?
            .map_err(|e| AccountError::Credential(e.to_string()))
    }

    fn generate_default_password() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(DEFAULT_PASSWORD_LENGTH)
            .map(char::from)
            .collect()
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AccountId, AccountError> {
        // Identity is globally unique: an email registered under any role
        // blocks registration under every role.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateEmail(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.hash_password(command.password).await?;

        // Two registrations may race past the check above; the store's
        // unique constraint decides, and surfaces as DuplicateEmail.
        let account = self
            .repository
            .create(NewAccount {
                name: command.name,
                email: command.email,
                password_hash,
                role: command.role,
                phone: None,
                job_title: None,
            })
            .await?;

        tracing::info!(account_id = %account.id, role = %account.role, "Account registered");

        Ok(account.id)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError> {
        let account = self
            .repository
            .find_by_email_and_role(&command.email, command.role)
            .await?
            .ok_or_else(|| {
                tracing::debug!(role = %command.role, "Login: no account for (email, role) pair");
                AccountError::InvalidCredentials
            })?;

        let claims = Claims::for_account(
            account.id.0,
            account.email.as_str(),
            account.role.as_str(),
            self.token_ttl_hours,
        );

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = account.password_hash.clone();
        let password = command.password;

        let token = tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| AccountError::Credential(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::debug!(account_id = %account.id, "Login: password mismatch");
                AccountError::IncorrectPassword
            }
            AuthenticationError::Password(err) => AccountError::Credential(err.to_string()),
            AuthenticationError::Jwt(err) => AccountError::Credential(err.to_string()),
        })?;

        tracing::info!(account_id = %account.id, role = %account.role, "Login successful");

        Ok(LoginOutcome {
            token,
            account_id: account.id,
        })
    }

    async fn request_password_reset(&self, email: &str) {
        // Deliberately inert: no reset token, email, or other artifact is
        // produced, and the outcome is identical whether or not the
        // account exists. Existence is only visible in internal logs.
        match self.repository.find_by_email(email).await {
            Ok(Some(account)) => {
                tracing::debug!(account_id = %account.id, "Password reset requested for existing account");
            }
            Ok(None) => {
                tracing::debug!("Password reset requested for unknown email");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password reset lookup failed");
            }
        }
    }

    async fn create_staff(&self, command: CreateStaffCommand) -> Result<AccountId, AccountError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateEmail(
                command.email.as_str().to_string(),
            ));
        }

        // The staff member is expected to go through the password-reset
        // flow before first login; the generated default is never shown.
        let password_hash = self
            .hash_password(Self::generate_default_password())
            .await?;

        let account = self
            .repository
            .create(NewAccount {
                name: command.name,
                email: command.email,
                password_hash,
                role: Role::Staff,
                phone: Some(command.phone),
                job_title: Some(command.job_title),
            })
            .await?;

        tracing::info!(account_id = %account.id, "Staff account created");

        Ok(account.id)
    }

    async fn list_staff(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_by_role(Role::Staff).await
    }

    async fn update_staff(
        &self,
        id: AccountId,
        command: UpdateStaffCommand,
    ) -> Result<(), AccountError> {
        if self
            .repository
            .email_taken_by_other(command.email.as_str(), id)
            .await?
        {
            return Err(AccountError::DuplicateEmail(
                command.email.as_str().to_string(),
            ));
        }

        self.repository.update_staff(id, &command).await
    }

    async fn delete_staff(&self, id: AccountId) -> Result<(), AccountError> {
        self.repository.delete_by_id_and_role(id, Role::Staff).await?;
        tracing::info!(account_id = %id, "Staff account deleted");
        Ok(())
    }

    async fn get_staff_profile(&self, id: AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id_and_role(id, Role::Staff)
            .await?
            .ok_or(AccountError::StaffNotFound(id.0))
    }

    async fn update_staff_profile(
        &self,
        id: AccountId,
        command: UpdateContactCommand,
    ) -> Result<(), AccountError> {
        if self
            .repository
            .email_taken_by_other(command.email.as_str(), id)
            .await?
        {
            return Err(AccountError::DuplicateEmail(
                command.email.as_str().to_string(),
            ));
        }

        self.repository.update_contact(id, &command).await
    }
}
