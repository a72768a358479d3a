use std::sync::Arc;

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns usernames submitted by other modules (group members, event
/// attendees) into ids of live accounts.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        match self.user_query.find_by_username(username).await {
            Ok(Some(user)) if !user.is_deleted => Ok(user.id),
            Ok(_) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(ResolveUserIdError::RepositoryError(msg)),
        }
    }

    pub async fn ensure_exists(&self, user_id: UserId) -> Result<(), ResolveUserIdError> {
        match self.user_query.find_by_id(user_id).await {
            Ok(Some(user)) if !user.is_deleted => Ok(()),
            Ok(_) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(ResolveUserIdError::RepositoryError(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_user;
    use crate::tests::support::mocks::MockUserQueryPort;

    #[tokio::test]
    async fn resolves_live_username() {
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_by_username()
            .withf(|u| u == "bob")
            .returning(|_| Ok(Some(sample_user(2, "bob", "bob@x.com"))));

        let resolver = UserIdentityResolver::new(Arc::new(query));
        assert_eq!(resolver.by_username("bob").await.unwrap(), UserId::from(2));
    }

    #[tokio::test]
    async fn unknown_or_deleted_username_is_not_found() {
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_by_username()
            .withf(|u| u == "ghost")
            .returning(|_| Ok(None));
        query
            .expect_find_by_username()
            .withf(|u| u == "gone")
            .returning(|_| {
                let mut user = sample_user(3, "gone", "gone@x.com");
                user.is_deleted = true;
                Ok(Some(user))
            });

        let resolver = UserIdentityResolver::new(Arc::new(query));
        assert!(matches!(
            resolver.by_username("ghost").await,
            Err(ResolveUserIdError::NotFound)
        ));
        assert!(matches!(
            resolver.by_username("gone").await,
            Err(ResolveUserIdError::NotFound)
        ));
    }

    #[tokio::test]
    async fn query_failure_is_repository_error() {
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(UserQueryError::DatabaseError("timeout".to_string())));

        let resolver = UserIdentityResolver::new(Arc::new(query));
        match resolver.ensure_exists(UserId::from(1)).await {
            Err(ResolveUserIdError::RepositoryError(msg)) => assert_eq!(msg, "timeout"),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
