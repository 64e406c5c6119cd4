use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::errors::{AppError, AppResult};

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Argon2id with the crate's default cost parameters and a random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?
        .to_string();
    Ok(hash)
}

/// Accounts registered before the switch to Argon2 still carry bcrypt hashes.
pub fn is_legacy_hash(stored_hash: &str) -> bool {
    BCRYPT_PREFIXES
        .iter()
        .any(|prefix| stored_hash.starts_with(prefix))
}

/// Checks Argon2 PHC strings and legacy bcrypt hashes. False for a wrong
/// password and for a stored value that is neither.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    if is_legacy_hash(stored_hash) {
        return bcrypt::verify(password, stored_hash).unwrap_or(false);
    }

    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
