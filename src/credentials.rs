use std::fmt;

use crate::consts::{PASSWORD_VAR, USERNAME_VAR};
use crate::error::AppError;

/// Account credentials, read once at startup
#[derive(Clone)]
pub(crate) struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let read = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(AppError::MissingCredential { var })
        };
        Ok(Self::new(read(USERNAME_VAR)?, read(PASSWORD_VAR)?))
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
