//! Login and registration flow.
//!
//! Validation strictly precedes any storage access; a mutation's completion
//! strictly precedes the success result. No failure here is fatal, every
//! error maps back to an editable form.

use std::sync::Arc;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{User, UserRole};
use crate::storage::{StorageError, StorageService};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 4 characters long.")]
    PasswordTooShort,
    #[error("Full Name is required.")]
    NameRequired,
    #[error("Student ID is required.")]
    StudentIdRequired,
    #[error("Please select a department.")]
    DepartmentRequired,
    #[error("Mobile number must be exactly 10 digits.")]
    InvalidMobile,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("Your account has been blocked by the administrator.")]
    AccountBlocked,
    #[error("An account with this email already exists.")]
    DuplicateAccount,
    #[error("user {0} not found")]
    UnknownUser(String),
    #[error("Connection error. Please try again.")]
    Connection(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_id: String,
    pub department: String,
    pub year_section: String,
    pub mobile: String,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn mobile_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("mobile regex"))
}

pub struct AuthService {
    storage: Arc<dyn StorageService>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    fn validate_login(credentials: &Credentials) -> Result<(), ValidationError> {
        if !email_re().is_match(&credentials.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if credentials.password.chars().count() < 4 {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }

    // Same order the form reports in: email, password, then the
    // registration-only fields top to bottom
    fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
        if !email_re().is_match(&form.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if form.password.chars().count() < 4 {
            return Err(ValidationError::PasswordTooShort);
        }
        if form.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if form.student_id.trim().is_empty() {
            return Err(ValidationError::StudentIdRequired);
        }
        if form.department.is_empty() {
            return Err(ValidationError::DepartmentRequired);
        }
        if !mobile_re().is_match(&form.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        Ok(())
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        Self::validate_login(credentials)?;

        let users = self.storage.get_stored_users().await?;
        let user = users
            .into_iter()
            .find(|u| u.email == credentials.email && u.verify_password(&credentials.password))
            .ok_or(AuthError::InvalidCredentials)?;

        if user.is_blocked {
            warn!(email = %user.email, "login refused for blocked account");
            return Err(AuthError::AccountBlocked);
        }

        info!(email = %user.email, role = ?user.role, "login succeeded");
        Ok(user)
    }

    /// Creates a Student account and returns it as an immediate successful
    /// login. The stored user list is untouched on any failure.
    pub async fn register(&self, form: RegistrationForm) -> Result<User, AuthError> {
        Self::validate_registration(&form)?;

        let users = self.storage.get_stored_users().await?;
        if users.iter().any(|u| u.email == form.email) {
            return Err(AuthError::DuplicateAccount);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            role: UserRole::Student,
            is_blocked: false,
            name: form.name,
            email: form.email,
            password: form.password,
            student_id: form.student_id,
            department: form.department,
            year_section: form.year_section,
            mobile: form.mobile,
        };
        self.storage.save_user(&user).await?;

        info!(email = %user.email, "account registered");
        Ok(user)
    }

    /// Admin block/unblock toggle.
    pub async fn set_blocked(&self, user_id: &str, blocked: bool) -> Result<User, AuthError> {
        let users = self.storage.get_stored_users().await?;
        let mut user = users
            .into_iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AuthError::UnknownUser(user_id.to_string()))?;
        user.is_blocked = blocked;
        self.storage.update_user(&user).await?;
        info!(email = %user.email, blocked, "account block flag updated");
        Ok(user)
    }
}
