mod authenticate_user;
mod change_password;
mod delete_user;
mod get_user;
mod list_users;
mod sign_up;
mod update_profile;

pub use authenticate_user::{
    AuthSession, AuthenticateUserError, AuthenticateUserUseCase, LoginCommand,
};
pub use change_password::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use sign_up::{SignUpCommand, SignUpError, SignUpForm, SignUpUseCase, MIN_PASSWORD_LEN};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
