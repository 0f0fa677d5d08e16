use async_trait::async_trait;

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

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with a validated role.
    ///
    /// The email must be unused by any account of any role.
    ///
    /// # Errors
    /// * `DuplicateEmail` - email already registered (any role)
    /// * `Credential` - password hashing failed
    /// * `Database` - store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AccountId, AccountError>;

    /// Authenticate against the (email, role) pair and issue a bearer token.
    ///
    /// The lookup is scoped to the claimed role: a correct password with
    /// the wrong role fails exactly like an unknown email.
    ///
    /// # Errors
    /// * `InvalidCredentials` - no account for that (email, role) pair
    /// * `IncorrectPassword` - account found, password mismatch
    /// * `Credential` - hash verification or token signing failed
    /// * `Database` - store operation failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError>;

    /// Password-reset request stub.
    ///
    /// Always succeeds with the same outcome whether or not the email is
    /// known; existence is only ever logged internally. No reset artifact
    /// is produced.
    async fn request_password_reset(&self, email: &str);

    /// Create a staff account with a generated default password.
    ///
    /// # Errors
    /// * `DuplicateEmail` - email already registered (any role)
    /// * `Credential` - password hashing failed
    /// * `Database` - store operation failed
    async fn create_staff(&self, command: CreateStaffCommand) -> Result<AccountId, AccountError>;

    /// List all staff accounts.
    async fn list_staff(&self) -> Result<Vec<Account>, AccountError>;

    /// Update a staff record by id (admin surface).
    ///
    /// # Errors
    /// * `StaffNotFound` - no staff row with that id
    /// * `DuplicateEmail` - new email is taken by another account
    /// * `Database` - store operation failed
    async fn update_staff(
        &self,
        id: AccountId,
        command: UpdateStaffCommand,
    ) -> Result<(), AccountError>;

    /// Delete a staff record by id.
    ///
    /// # Errors
    /// * `StaffNotFound` - no staff row with that id
    /// * `Database` - store operation failed
    async fn delete_staff(&self, id: AccountId) -> Result<(), AccountError>;

    /// Fetch the calling staff member's own record.
    ///
    /// # Errors
    /// * `StaffNotFound` - the caller has no staff row
    /// * `Database` - store operation failed
    async fn get_staff_profile(&self, id: AccountId) -> Result<Account, AccountError>;

    /// Update the calling staff member's own contact details.
    ///
    /// # Errors
    /// * `StaffNotFound` - the caller has no staff row
    /// * `DuplicateEmail` - new email is taken by another account
    /// * `Database` - store operation failed
    async fn update_staff_profile(
        &self,
        id: AccountId,
        command: UpdateContactCommand,
    ) -> Result<(), AccountError>;
}

/// Persistence operations for the users table.
///
/// Injected into the service and the router, never reached through global
/// state, so tests can substitute doubles.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Insert a new account row.
    ///
    /// The email uniqueness constraint is authoritative here: a concurrent
    /// registration that slips past the service's existence check must
    /// surface as `DuplicateEmail`, never as a generic failure.
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Look up by email across all roles.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Role-scoped lookup for login.
    async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<Account>, AccountError>;

    /// Look up a row only if it carries the given role.
    async fn find_by_id_and_role(
        &self,
        id: AccountId,
        role: Role,
    ) -> Result<Option<Account>, AccountError>;

    /// All accounts with the given role, oldest first.
    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, AccountError>;

    /// Whether any account other than `id` already uses `email`.
    async fn email_taken_by_other(
        &self,
        email: &str,
        id: AccountId,
    ) -> Result<bool, AccountError>;

    /// Update a staff row in full.
    ///
    /// # Errors
    /// * `StaffNotFound` - no row with that id and role staff
    async fn update_staff(
        &self,
        id: AccountId,
        command: &UpdateStaffCommand,
    ) -> Result<(), AccountError>;

    /// Update a staff row's contact fields only.
    ///
    /// # Errors
    /// * `StaffNotFound` - no row with that id and role staff
    async fn update_contact(
        &self,
        id: AccountId,
        command: &UpdateContactCommand,
    ) -> Result<(), AccountError>;

    /// Delete a row only if it carries the given role.
    ///
    /// # Errors
    /// * `StaffNotFound` - no row with that id and role
    async fn delete_by_id_and_role(&self, id: AccountId, role: Role) -> Result<(), AccountError>;
}
