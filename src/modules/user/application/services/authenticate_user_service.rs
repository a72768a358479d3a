use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::user::application::ports::{
    incoming::use_cases::{AuthSession, AuthenticateUserError, AuthenticateUserUseCase, LoginCommand},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct AuthenticateUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> AuthenticateUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> AuthenticateUserUseCase for AuthenticateUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, AuthenticateUserError> {
        let credentials = self
            .query
            .find_credentials(command.username())
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?
            .filter(|c| !c.is_deleted)
            .ok_or(AuthenticateUserError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(command.password(), credentials.password_hash.as_str())
            .await
            .map_err(|e| AuthenticateUserError::HashingFailed(e.to_string()))?;

        if !matches {
            warn!(username = %command.username(), "Login rejected: wrong password");
            return Err(AuthenticateUserError::InvalidCredentials);
        }

        let user = self
            .query
            .find_by_id(credentials.id)
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?
            .ok_or(AuthenticateUserError::InvalidCredentials)?;

        let token = self
            .tokens
            .issue_token(user.id)
            .map_err(|e| AuthenticateUserError::TokenFailed(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{sample_credentials, sample_user};
    use crate::tests::support::mocks::{
        MockPasswordHasherPort, MockTokenProviderPort, MockUserQueryPort,
    };
    use crate::user::application::ports::outgoing::{HashError, IssuedToken};

    fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        let mut tokens = MockTokenProviderPort::new();
        tokens.expect_issue_token().returning(|_| {
            Ok(IssuedToken {
                access_token: "signed.jwt.token".to_string(),
                expires_in: 3600,
            })
        });
        Arc::new(tokens)
    }

    fn hasher(result: Result<bool, HashError>) -> Arc<dyn PasswordHasher + Send + Sync> {
        let mut hasher = MockPasswordHasherPort::new();
        hasher
            .expect_verify_password()
            .returning(move |_, _| result.clone());
        Arc::new(hasher)
    }

    fn query_with_alice() -> MockUserQueryPort {
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_credentials()
            .withf(|username| username == "alice")
            .returning(|_| Ok(Some(sample_credentials(1, "alice", false))));
        query
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_user(1, "alice", "alice@x.com"))));
        query
    }

    fn login() -> LoginCommand {
        LoginCommand::new("alice", "longpass1").unwrap()
    }

    #[tokio::test]
    async fn correct_password_issues_bearer_token() {
        let service = AuthenticateUserService::new(query_with_alice(), hasher(Ok(true)), token_provider());

        let session = service.execute(login()).await.unwrap();

        assert_eq!(session.access_token, "signed.jwt.token");
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.user.username, "alice");
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let service =
            AuthenticateUserService::new(query_with_alice(), hasher(Ok(false)), token_provider());

        let result = service.execute(login()).await;
        assert!(matches!(result, Err(AuthenticateUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_username_is_invalid_credentials() {
        let mut query = MockUserQueryPort::new();
        query.expect_find_credentials().returning(|_| Ok(None));

        let service = AuthenticateUserService::new(query, hasher(Ok(true)), token_provider());

        let result = service.execute(login()).await;
        assert!(matches!(result, Err(AuthenticateUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn deleted_account_cannot_log_in() {
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_credentials()
            .returning(|_| Ok(Some(sample_credentials(1, "alice", true))));

        let service = AuthenticateUserService::new(query, hasher(Ok(true)), token_provider());

        let result = service.execute(login()).await;
        assert!(matches!(result, Err(AuthenticateUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_hashing_failure() {
        let service = AuthenticateUserService::new(
            query_with_alice(),
            hasher(Err(HashError::VerifyFailed)),
            token_provider(),
        );

        let result = service.execute(login()).await;
        assert!(matches!(result, Err(AuthenticateUserError::HashingFailed(_))));
    }
}
