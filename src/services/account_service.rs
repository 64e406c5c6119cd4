use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{hash_password, is_legacy_hash, verify_password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::Account,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{AccountDto, AuthResponse},
        },
    },
    repositories::{account_repository::DUPLICATE_EMAIL_MESSAGE, AccountRepository},
};

const REGISTER_FAILED_MESSAGE: &str = "Server error during registration.";
const LOGIN_FAILED_MESSAGE: &str = "Server error during login.";

/// Runs CPU-heavy password work off the async worker.
async fn run_blocking<T, F>(task: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::InternalError(format!("Password task failed: {}", e)))?
}

/// Server-side failures are logged in full and reported with the route's
/// generic message; client errors pass through untouched.
fn mask_server_error(err: AppError, public_message: &str) -> AppError {
    if err.is_server_error() {
        log::error!("{} {}", public_message, err);
        AppError::ServerError(public_message.to_string())
    } else {
        err
    }
}

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    jwt_service: Arc<JwtService>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        self.register_account(request)
            .await
            .map_err(|err| mask_server_error(err, REGISTER_FAILED_MESSAGE))
    }

    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        self.login(request)
            .await
            .map_err(|err| mask_server_error(err, LOGIN_FAILED_MESSAGE))
    }

    async fn register_account(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        request.validate().map_err(|_| {
            AppError::ValidationError("Name, email and password are required.".to_string())
        })?;

        let (Some(name), Some(email), Some(password)) =
            (request.name, request.email, request.password)
        else {
            return Err(AppError::ValidationError(
                "Name, email and password are required.".to_string(),
            ));
        };

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyExists(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let password_hash = run_blocking(move || hash_password(&password)).await?;
        let account = Account::new(&name, &email, password_hash, request.role.as_deref());

        // The unique index still rejects a concurrent registration that
        // slipped past the lookup above.
        let account = self.repository.create(account).await?;
        let token = self.jwt_service.create_token(&account)?;

        log::info!("Registered account {}", account.id_hex());

        Ok(AuthResponse {
            message: "User registered successfully.".to_string(),
            user: AccountDto::from(&account),
            token,
        })
    }

    async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate().map_err(|_| {
            AppError::ValidationError("Email and password are required.".to_string())
        })?;

        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(AppError::ValidationError(
                "Email and password are required.".to_string(),
            ));
        };

        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let stored_hash = account.password_hash.clone();
        let candidate = password.clone();
        let verified =
            run_blocking(move || Ok(verify_password(&candidate, &stored_hash))).await?;
        if !verified {
            return Err(AppError::InvalidCredentials);
        }

        if is_legacy_hash(&account.password_hash) {
            self.upgrade_hash(&account.email, password).await;
        }

        let token = self.jwt_service.create_token(&account)?;

        Ok(AuthResponse {
            message: "Login successful.".to_string(),
            user: AccountDto::from(&account),
            token,
        })
    }

    /// Replaces a verified bcrypt hash with Argon2. Failure keeps the old
    /// hash and does not affect the login.
    async fn upgrade_hash(&self, email: &str, password: String) {
        let result = match run_blocking(move || hash_password(&password)).await {
            Ok(hash) => self.repository.update_password_hash(email, &hash).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => log::info!("Upgraded legacy password hash for {}", email),
            Err(err) => log::warn!("Could not upgrade legacy password hash for {}: {}", email, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, test_utils::InMemoryAccountRepository};

    fn service_with(jwt_service: JwtService) -> (AccountService, Arc<InMemoryAccountRepository>) {
        let repository = Arc::new(InMemoryAccountRepository::default());
        let service = AccountService::new(repository.clone(), Arc::new(jwt_service));
        (service, repository)
    }

    fn service() -> (AccountService, Arc<InMemoryAccountRepository>) {
        let config = Config::test_config();
        service_with(JwtService::new(config.jwt_secret.as_ref(), 1))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Ada".to_string()),
            email: Some(email.to_string()),
            password: Some("correct horse".to_string()),
            role: None,
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_register_returns_token_and_public_fields() {
        let (service, repository) = service();

        let response = service.register(register_request("ada@example.com")).await.unwrap();

        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.user.role, "user");
        assert!(!response.token.is_empty());

        let stored = repository.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "correct horse");
        assert_eq!(stored.id_hex(), response.user.id);
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_conflicts() {
        let (service, repository) = service();
        service.register(register_request("ada@example.com")).await.unwrap();

        let result = service.register(register_request("ada@example.com")).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
        assert_eq!(repository.len().await, 1);
    }

    #[actix_web::test]
    async fn test_register_missing_field_is_validation_error() {
        let (service, repository) = service();
        let mut request = register_request("ada@example.com");
        request.password = None;

        let result = service.register(request).await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "Name, email and password are required.")
            }
            _ => panic!("Expected ValidationError"),
        }
        assert_eq!(repository.len().await, 0);
    }

    #[actix_web::test]
    async fn test_register_without_secret_hides_configuration_detail() {
        let (service, _) = service_with(JwtService::new(None, 1));

        let err = service
            .register(register_request("ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ServerError(_)));
        assert_eq!(err.public_message(), "Server error during registration.");
        assert!(!err.public_message().contains("JWT_SECRET"));
    }

    #[actix_web::test]
    async fn test_login_without_secret_hides_configuration_detail() {
        let (service, repository) = service_with(JwtService::new(None, 1));
        let hash = hash_password("correct horse").unwrap();
        repository
            .create(Account::new("Ada", "ada@example.com", hash, None))
            .await
            .unwrap();

        let err = service
            .authenticate(login_request("ada@example.com", "correct horse"))
            .await
            .unwrap_err();

        assert_eq!(err.public_message(), "Server error during login.");
    }

    #[actix_web::test]
    async fn test_legacy_bcrypt_account_logs_in_and_is_upgraded() {
        let (service, repository) = service();
        let legacy = bcrypt::hash("correct horse", 4).unwrap();
        repository
            .create(Account::new("Ada", "ada@example.com", legacy, None))
            .await
            .unwrap();

        let response = service
            .authenticate(login_request("ada@example.com", "correct horse"))
            .await
            .unwrap();
        assert_eq!(response.message, "Login successful.");

        let stored = repository.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert!(stored.password_hash.starts_with("$argon2"));

        service
            .authenticate(login_request("ada@example.com", "correct horse"))
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_legacy_bcrypt_account_rejects_wrong_password() {
        let (service, repository) = service();
        let legacy = bcrypt::hash("correct horse", 4).unwrap();
        repository
            .create(Account::new("Ada", "ada@example.com", legacy.clone(), None))
            .await
            .unwrap();

        let result = service
            .authenticate(login_request("ada@example.com", "wrong"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
        let stored = repository.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, legacy);
    }

    #[actix_web::test]
    async fn test_password_work_runs_off_the_calling_thread() {
        let caller = std::thread::current().id();

        let worker = run_blocking(|| Ok(std::thread::current().id())).await.unwrap();

        assert_ne!(worker, caller);
    }

    #[actix_web::test]
    async fn test_login_succeeds_with_correct_password() {
        let (service, _) = service();
        let registered = service.register(register_request("ada@example.com")).await.unwrap();

        let response = service
            .authenticate(login_request("ada@example.com", "correct horse"))
            .await
            .unwrap();

        assert_eq!(response.user.id, registered.user.id);
        assert_eq!(response.message, "Login successful.");
    }

    #[actix_web::test]
    async fn test_login_failures_share_one_message() {
        let (service, _) = service();
        service.register(register_request("ada@example.com")).await.unwrap();

        let wrong_password = service
            .authenticate(login_request("ada@example.com", "wrong"))
            .await
            .unwrap_err();
        let unknown_email = service
            .authenticate(login_request("nobody@example.com", "correct horse"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.public_message(), unknown_email.public_message());
    }
}
