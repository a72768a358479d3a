use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    AuthenticateUserUseCase, ChangePasswordUseCase, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, SignUpUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub sign_up: Arc<dyn SignUpUseCase + Send + Sync>,
    pub authenticate: Arc<dyn AuthenticateUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
