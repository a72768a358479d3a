pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::config::HasherKind;
use crate::config::Argon2Settings;
use crate::user::application::ports::outgoing::{HashError, PasswordHasher};

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

/// Hasher selected by `PASSWORD_HASHER`.
pub fn build_password_hasher(
    kind: HasherKind,
    argon2: Argon2Settings,
) -> Result<Arc<dyn PasswordHasher + Send + Sync>, HashError> {
    match kind {
        HasherKind::Argon2 => Ok(Arc::new(Argon2Hasher::new(argon2)?)),
        HasherKind::Bcrypt => Ok(Arc::new(BcryptHasher::new())),
    }
}
