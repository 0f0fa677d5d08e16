use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::EmailAddress;
use crate::account::models::NewAccount;
use crate::account::models::Role;
use crate::account::models::UpdateContactCommand;
use crate::account::models::UpdateStaffCommand;
use crate::account::ports::AccountRepository;

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, role, phone, job_title, created_at";

/// Postgres-backed account store.
///
/// The unique constraint on `email` is the serialization point for
/// concurrent registrations; its violation is translated to
/// `DuplicateEmail` here so the race never surfaces as a server error.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: sqlx::Error) -> AccountError {
    AccountError::Database(e.to_string())
}

fn unique_violation_to_duplicate(e: sqlx::Error, email: &str) -> AccountError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountError::DuplicateEmail(email.to_string());
        }
    }
    AccountError::Database(e.to_string())
}

fn map_row(row: PgRow) -> Result<Account, AccountError> {
    let role: String = row.try_get("role").map_err(db_err)?;

    Ok(Account {
        id: AccountId(row.try_get("id").map_err(db_err)?),
        name: row.try_get("name").map_err(db_err)?,
        email: EmailAddress::new(row.try_get("email").map_err(db_err)?)?,
        password_hash: row.try_get("password_hash").map_err(db_err)?,
        role: role.parse()?,
        phone: row.try_get("phone").map_err(db_err)?,
        job_title: row.try_get("job_title").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, role, phone, job_title)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(&account.phone)
        .bind(&account.job_title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation_to_duplicate(e, account.email.as_str()))?;

        map_row(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM users
            WHERE email = $1
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(map_row).transpose()
    }

    async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM users
            WHERE email = $1 AND role = $2
            "#
        ))
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(map_row).transpose()
    }

    async fn find_by_id_and_role(
        &self,
        id: AccountId,
        role: Role,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM users
            WHERE id = $1 AND role = $2
            "#
        ))
        .bind(id.0)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(map_row).transpose()
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM users
            WHERE role = $1
            ORDER BY id
            "#
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn email_taken_by_other(
        &self,
        email: &str,
        id: AccountId,
    ) -> Result<bool, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id
            FROM users
            WHERE email = $1 AND id <> $2
            "#,
        )
        .bind(email)
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.is_some())
    }

    async fn update_staff(
        &self,
        id: AccountId,
        command: &UpdateStaffCommand,
    ) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, phone = $4, job_title = $5
            WHERE id = $1 AND role = 'staff'
            "#,
        )
        .bind(id.0)
        .bind(&command.name)
        .bind(command.email.as_str())
        .bind(&command.phone)
        .bind(&command.job_title)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_violation_to_duplicate(e, command.email.as_str()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::StaffNotFound(id.0));
        }

        Ok(())
    }

    async fn update_contact(
        &self,
        id: AccountId,
        command: &UpdateContactCommand,
    ) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, phone = $4
            WHERE id = $1 AND role = 'staff'
            "#,
        )
        .bind(id.0)
        .bind(&command.name)
        .bind(command.email.as_str())
        .bind(&command.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_violation_to_duplicate(e, command.email.as_str()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::StaffNotFound(id.0));
        }

        Ok(())
    }

    async fn delete_by_id_and_role(&self, id: AccountId, role: Role) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1 AND role = $2
            "#,
        )
        .bind(id.0)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::StaffNotFound(id.0));
        }

        Ok(())
    }
}
