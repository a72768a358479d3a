mod authenticate_user_service;
mod change_password_service;
mod delete_user_service;
mod get_user_service;
mod sign_up_service;
mod update_profile_service;

pub use authenticate_user_service::AuthenticateUserService;
pub use change_password_service::ChangePasswordService;
pub use delete_user_service::DeleteUserService;
pub use get_user_service::{GetUserService, ListUsersService};
pub use sign_up_service::SignUpService;
pub use update_profile_service::UpdateProfileService;
