use async_trait::async_trait;

use crate::shared::validation::{
    check_email, check_max_len, check_name_boundaries, required, FieldErrors,
};
use crate::user::application::domain::entities::User;

pub const MIN_PASSWORD_LEN: usize = 8;

//
// ──────────────────────────────────────────────────────────
// Sign-up form
// ──────────────────────────────────────────────────────────
//

/// Raw sign-up submission, exactly as the client sent it.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub bio: Option<String>,
}

/// A sign-up that passed every field check that does not need storage.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    bio: Option<String>,
}

impl SignUpCommand {
    pub fn new(form: SignUpForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = required(&mut errors, "first_name", &form.first_name)
            .filter(|v| check_max_len(&mut errors, "first_name", "First name", v, 40))
            .map(str::to_string);

        let last_name = required(&mut errors, "last_name", &form.last_name)
            .filter(|v| check_max_len(&mut errors, "last_name", "Last name", v, 40))
            .map(str::to_string);

        let email = required(&mut errors, "email", &form.email)
            .filter(|v| check_email(&mut errors, "email", v))
            .filter(|v| check_max_len(&mut errors, "email", "Email", v, 254))
            .map(str::to_string);

        let username = required(&mut errors, "username", &form.username)
            .filter(|v| check_max_len(&mut errors, "username", "Username", v, 50))
            .filter(|v| check_name_boundaries(&mut errors, "username", "Username", v))
            .map(str::to_string);

        if required(&mut errors, "password", &form.password).is_some()
            && form.password.chars().count() < MIN_PASSWORD_LEN
        {
            errors.add(
                "password",
                format!("Password must have a minimum of {MIN_PASSWORD_LEN} characters."),
            );
        }

        required(&mut errors, "confirm_password", &form.confirm_password);
        if form.confirm_password != form.password {
            errors.add("confirm_password", "Passwords do not match.");
        }

        let bio = form
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .filter(|v| check_max_len(&mut errors, "bio", "Bio", v, 350))
            .map(str::to_string);

        errors.into_result()?;

        match (username, first_name, last_name, email) {
            (Some(username), Some(first_name), Some(last_name), Some(email)) => Ok(Self {
                username,
                first_name,
                last_name,
                email,
                password: form.password,
                bio,
            }),
            // Every missing value above recorded an error
            _ => Err(FieldErrors::new()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignUpError {
    #[error("Sign-up rejected: {0}")]
    Validation(FieldErrors),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, command: SignUpCommand) -> Result<User, SignUpError>;
}
