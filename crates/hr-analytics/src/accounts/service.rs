use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use super::password::{hash_password, verify_password};
use super::store::{HrUser, UserStore};
use crate::workforce::RepositoryError;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    fn normalized_email(&self) -> Result<String, AccountError> {
        let email = self.email.trim().to_ascii_lowercase();
        if email.is_empty() || self.password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }
        Ok(email)
    }
}

/// Registration and login for HR staff.
pub struct AccountService<S> {
    store: Arc<S>,
}

impl<S> AccountService<S>
where
    S: UserStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn register(&self, credentials: &Credentials) -> Result<HrUser, AccountError> {
        let email = credentials.normalized_email()?;
        if self.store.find(&email)?.is_some() {
            warn!(%email, "registration rejected, email already in use");
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_password(&credentials.password)
            .map_err(|error| AccountError::Hashing(error.to_string()))?;
        let user = HrUser {
            email,
            password_hash,
            registered_at: Utc::now(),
        };

        let stored = match self.store.insert(user) {
            Ok(stored) => stored,
            Err(RepositoryError::Conflict) => return Err(AccountError::EmailTaken),
            Err(other) => return Err(other.into()),
        };
        info!(email = %stored.email, "hr user registered");
        Ok(stored)
    }

    /// Unknown email and wrong password fail the same way.
    pub fn login(&self, credentials: &Credentials) -> Result<HrUser, AccountError> {
        let email = credentials.normalized_email()?;
        match self.store.find(&email)? {
            Some(user) if verify_password(&credentials.password, &user.password_hash) => {
                info!(%email, "hr user logged in");
                Ok(user)
            }
            _ => {
                warn!(%email, "login rejected");
                Err(AccountError::InvalidCredentials)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Email already registered.")]
    EmailTaken,
    #[error("Incorrect credentials. Please sign up or try again.")]
    InvalidCredentials,
    #[error("email and password are required")]
    MissingCredentials,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
