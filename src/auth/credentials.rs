//! Credential store
//!
//! Maps usernames to a password digest and a role. The built-in table holds
//! the two committee accounts; a JSON credentials file can replace it.

use std::collections::HashMap;
use std::path::Path;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::{LedgerError, LedgerResult};

/// SHA-256 of "password"
const ADMIN_DIGEST: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
/// SHA-256 of "viewer"
const VIEWER_DIGEST: &str = "d35ca5051b82ffc326a3b0b6574a9a3161dee16b9478a199ee39cd803ce5b799";

/// Anything that can check a password and tell us a user's role
pub trait CredentialProvider {
    /// Check a username/password pair
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Role of a known user
    fn role_of(&self, username: &str) -> Option<Role>;
}

/// Usernames are compared trimmed and lower-cased
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Hex-encoded SHA-256 of a string
pub fn sha256_hex(input: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash a password as an Argon2id PHC string for the credentials file
pub fn hash_password(password: &str) -> LedgerResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| LedgerError::Credentials(format!("Password hashing failed: {}", e)))
}

/// A stored one-way digest of a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordDigest {
    /// Hex SHA-256, as used by the built-in accounts
    Sha256(String),
    /// Argon2 PHC string
    Argon2(String),
}

impl PasswordDigest {
    /// Check a candidate password against this digest
    pub fn matches(&self, password: &str) -> bool {
        match self {
            Self::Sha256(expected) => sha256_hex(password).eq_ignore_ascii_case(expected.trim()),
            Self::Argon2(phc) => match PasswordHash::new(phc) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring malformed argon2 hash");
                    false
                }
            },
        }
    }
}

/// One account in the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub role: Role,
    pub password: PasswordDigest,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    accounts: Vec<CredentialRecord>,
}

/// In-memory credential table
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    accounts: HashMap<String, CredentialRecord>,
}

impl StaticCredentials {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The two committee accounts: `admin` and `viewer`
    pub fn builtin() -> Self {
        let mut store = Self::new();
        store.insert("admin", Role::Admin, PasswordDigest::Sha256(ADMIN_DIGEST.into()));
        store.insert(
            "viewer",
            Role::Viewer,
            PasswordDigest::Sha256(VIEWER_DIGEST.into()),
        );
        store
    }

    /// Load accounts from a credentials file
    pub fn from_file(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Credentials(format!(
                "Failed to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file: CredentialFile = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Credentials(format!(
                "Failed to parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        if file.accounts.is_empty() {
            return Err(LedgerError::Credentials(format!(
                "Credentials file {} defines no accounts",
                path.display()
            )));
        }

        let mut store = Self::new();
        for record in file.accounts {
            store.insert(&record.username, record.role, record.password);
        }
        Ok(store)
    }

    /// Use the credentials file if present, otherwise the built-in accounts
    pub fn load_or_builtin(path: &Path) -> LedgerResult<Self> {
        if path.exists() {
            let store = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), users = store.len(), "loaded credentials file");
            Ok(store)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Add or replace an account
    pub fn insert(&mut self, username: &str, role: Role, password: PasswordDigest) {
        let username = normalize_username(username);
        self.accounts.insert(
            username.clone(),
            CredentialRecord {
                username,
                role,
                password,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialProvider for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(&normalize_username(username))
            .map(|record| record.password.matches(password.trim()))
            .unwrap_or(false)
    }

    fn role_of(&self, username: &str) -> Option<Role> {
        self.accounts
            .get(&normalize_username(username))
            .map(|record| record.role)
    }
}
