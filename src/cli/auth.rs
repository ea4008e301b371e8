//! Account CLI commands

use std::io::BufRead;

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::auth::hash_password;
use crate::error::{LedgerError, LedgerResult};
use crate::session::Session;

/// Account subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Show the signed-in user, role and the pages they may open
    Whoami,
    /// Hash a password for an entry in the credentials file
    HashPassword {
        /// Read the password from standard input instead of prompting
        #[arg(long)]
        stdin: bool,
    },
}

impl AuthCommands {
    /// Whether the command runs on behalf of a signed-in user
    pub fn needs_session(&self) -> bool {
        matches!(self, Self::Whoami)
    }
}

/// Handle an account command
///
/// `session` is only consulted by commands that need one.
pub fn handle_auth_command(session: Option<&Session>, cmd: AuthCommands) -> LedgerResult<()> {
    match cmd {
        AuthCommands::Whoami => {
            let session = session.ok_or_else(|| {
                LedgerError::Authentication("Not signed in".to_string())
            })?;
            let pages: Vec<String> = session.role().pages().iter().map(|p| p.to_string()).collect();
            println!("User:  {}", session.username());
            println!("Role:  {}", session.role());
            println!("Pages: {}", pages.join(", "));
        }

        AuthCommands::HashPassword { stdin } => {
            let password = if stdin {
                read_password_line()?
            } else {
                prompt_new_password()?
            };
            if password.trim().is_empty() {
                return Err(LedgerError::Validation("Password cannot be empty".into()));
            }
            println!("{}", hash_password(password.trim())?);
        }
    }

    Ok(())
}

/// Prompt for a password (hidden input)
pub fn prompt_password(prompt: &str) -> LedgerResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| LedgerError::Authentication(format!("Failed to read password: {}", e)))
}

fn prompt_new_password() -> LedgerResult<Zeroizing<String>> {
    let first = prompt_password("New password: ")?;
    let second = prompt_password("Confirm password: ")?;
    if *first != *second {
        return Err(LedgerError::Validation("Passwords do not match".into()));
    }
    Ok(first)
}

fn read_password_line() -> LedgerResult<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
