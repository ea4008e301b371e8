//! Authentication and role-based access
//!
//! - `credentials`: the credential store behind the [`CredentialProvider`] trait
//! - `role`: roles and the pages each may open

pub mod credentials;
pub mod role;

pub use credentials::{
    hash_password, normalize_username, CredentialProvider, PasswordDigest, StaticCredentials,
};
pub use role::{Page, Role};
