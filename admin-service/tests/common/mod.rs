use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use admin_service::account::errors::AccountError;
use admin_service::account::models::Account;
use admin_service::account::models::AccountId;
use admin_service::account::models::NewAccount;
use admin_service::account::models::Role;
use admin_service::account::models::UpdateContactCommand;
use admin_service::account::models::UpdateStaffCommand;
use admin_service::account::ports::AccountRepository;
use admin_service::account::service::AccountService;
use admin_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use chrono::Utc;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32b";

/// In-memory store double with the same uniqueness semantics as the
/// Postgres schema, so the whole router + middleware stack can be
/// exercised without a database.
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();

        // Email uniqueness is authoritative here, as in the real schema
        if accounts
            .iter()
            .any(|a| a.email.as_str() == account.email.as_str())
        {
            return Err(AccountError::DuplicateEmail(
                account.email.as_str().to_string(),
            ));
        }

        let created = Account {
            id: AccountId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
            phone: account.phone,
            job_title: account.job_title,
            created_at: Utc::now(),
        };
        accounts.push(created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email.as_str() == email).cloned())
    }

    async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.email.as_str() == email && a.role == role)
            .cloned())
    }

    async fn find_by_id_and_role(
        &self,
        id: AccountId,
        role: Role,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.id == id && a.role == role)
            .cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().filter(|a| a.role == role).cloned().collect())
    }

    async fn email_taken_by_other(
        &self,
        email: &str,
        id: AccountId,
    ) -> Result<bool, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .any(|a| a.email.as_str() == email && a.id != id))
    }

    async fn update_staff(
        &self,
        id: AccountId,
        command: &UpdateStaffCommand,
    ) -> Result<(), AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id && a.role == Role::Staff)
            .ok_or(AccountError::StaffNotFound(id.0))?;

        account.name = command.name.clone();
        account.email = command.email.clone();
        account.phone = Some(command.phone.clone());
        account.job_title = Some(command.job_title.clone());

        Ok(())
    }

    async fn update_contact(
        &self,
        id: AccountId,
        command: &UpdateContactCommand,
    ) -> Result<(), AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id && a.role == Role::Staff)
            .ok_or(AccountError::StaffNotFound(id.0))?;

        account.name = command.name.clone();
        account.email = command.email.clone();
        account.phone = Some(command.phone.clone());

        Ok(())
    }

    async fn delete_by_id_and_role(&self, id: AccountId, role: Role) -> Result<(), AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| !(a.id == id && a.role == role));

        if accounts.len() == before {
            return Err(AccountError::StaffNotFound(id.0));
        }

        Ok(())
    }
}

/// Test application that spawns the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));
        let account_service = Arc::new(AccountService::new(
            repository,
            Arc::clone(&authenticator),
            2,
        ));

        // Random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(account_service, authenticator);
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password,
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning a live bearer token.
    pub async fn token_for(&self, name: &str, email: &str, role: &str) -> String {
        let response = self.register(name, email, "pw123", role).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": "pw123",
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"].as_str().expect("Missing token").to_string()
    }
}
