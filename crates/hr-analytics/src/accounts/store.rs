use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workforce::RepositoryError;

/// HR staff account. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HrUser {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

pub trait UserStore: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the email is taken.
    fn insert(&self, user: HrUser) -> Result<HrUser, RepositoryError>;
    fn find(&self, email: &str) -> Result<Option<HrUser>, RepositoryError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<String, HrUser>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, HrUser>>, RepositoryError> {
        self.users
            .lock()
            .map_err(|_| RepositoryError::Unavailable("user store lock poisoned".to_string()))
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: HrUser) -> Result<HrUser, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&user.email) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    fn find(&self, email: &str) -> Result<Option<HrUser>, RepositoryError> {
        Ok(self.lock()?.get(email).cloned())
    }
}
