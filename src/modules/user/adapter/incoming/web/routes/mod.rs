mod change_password;
mod delete_user;
mod get_user;
mod list_users;
mod login;
mod sign_up;
mod update_profile;

pub use change_password::{change_password_handler, ChangePasswordRequest};
pub use delete_user::delete_user_handler;
pub use get_user::get_user_handler;
pub use list_users::list_users_handler;
pub use login::{login_handler, LoginRequest};
pub use sign_up::{sign_up_handler, SignUpRequest};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};

// utoipa path items for the OpenAPI document
pub use change_password::__path_change_password_handler;
pub use delete_user::__path_delete_user_handler;
pub use get_user::__path_get_user_handler;
pub use list_users::__path_list_users_handler;
pub use login::__path_login_handler;
pub use sign_up::__path_sign_up_handler;
pub use update_profile::__path_update_profile_handler;
