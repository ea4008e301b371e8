//! Session context
//!
//! A session is created by a successful login and owns the books for as long
//! as the user works with them. Logging out hands the books back.

use crate::auth::{normalize_username, CredentialProvider, Page, Role};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Books;

/// A signed-in user working on the books
#[derive(Debug)]
pub struct Session {
    username: String,
    role: Role,
    books: Books,
}

impl Session {
    /// Authenticate and open a session over `books`
    pub fn login<P: CredentialProvider + ?Sized>(
        provider: &P,
        username: &str,
        password: &str,
        books: Books,
    ) -> LedgerResult<Self> {
        let invalid =
            || LedgerError::Authentication("Incorrect username or password".to_string());

        if !provider.verify(username, password) {
            tracing::warn!(user = %normalize_username(username), "login rejected");
            return Err(invalid());
        }

        let role = provider.role_of(username).ok_or_else(invalid)?;
        let username = normalize_username(username);
        tracing::info!(user = %username, %role, "login successful");

        Ok(Self {
            username,
            role,
            books,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn books(&self) -> &Books {
        &self.books
    }

    /// Check that the signed-in role may open `page`
    pub fn require(&self, page: Page) -> LedgerResult<()> {
        if self.role.can_access(page) {
            Ok(())
        } else {
            Err(LedgerError::Forbidden {
                role: self.role.to_string(),
                page: page.to_string(),
            })
        }
    }

    /// Open a page for writing: checks access and returns the books
    pub fn open(&mut self, page: Page) -> LedgerResult<&mut Books> {
        self.require(page)?;
        Ok(&mut self.books)
    }

    /// End the session, returning the books to the caller
    pub fn logout(self) -> Books {
        tracing::info!(user = %self.username, "logout");
        self.books
    }
}
