use std::sync::Arc;

use crate::user::adapter::outgoing::jwt::JwtTokenService;
use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::TokenProvider;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(TEST_SECRET, 3600)
}

/// Same shape the server registers as app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header carrying a fresh token for `user_id`.
pub fn bearer_header(user_id: i32) -> (&'static str, String) {
    let issued = test_jwt_service()
        .issue_token(UserId::from(user_id))
        .expect("test token should be issued");
    ("Authorization", format!("Bearer {}", issued.access_token))
}
