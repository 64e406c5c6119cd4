pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::Claims;
pub use jwt::JwtService;
pub use password::{hash_password, is_legacy_hash, verify_password};
