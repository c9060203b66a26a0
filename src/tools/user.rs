use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A user record. Two records describe the same user exactly when all
/// three fields compare equal, including the raw password hash bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password_hash: Vec<u8>,
}

impl User {
    #[must_use]
    pub fn new(username: &str, email: &str, password_hash: Vec<u8>) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        }
    }
}

/// Loads a JSON array of user records.
pub fn load_users_from_file(path: &Path) -> Result<Vec<User>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read user list: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse user list: {}", path.display()))
}
