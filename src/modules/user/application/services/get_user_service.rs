use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::{
        incoming::use_cases::{GetUserError, GetUserUseCase, ListUsersError, ListUsersUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<User, GetUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::RepositoryError(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }
}

#[derive(Debug, Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        self.query
            .list_active_users()
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))
    }
}
