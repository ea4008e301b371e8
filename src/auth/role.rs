//! Roles and the pages each role may open

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Dashboard and reports only
    Viewer,
}

impl Role {
    /// Whether this role may open a page
    pub fn can_access(&self, page: Page) -> bool {
        match self {
            Self::Admin => true,
            Self::Viewer => matches!(page, Page::Dashboard | Page::Reports),
        }
    }

    /// Pages shown in navigation for this role
    pub fn pages(&self) -> Vec<Page> {
        Page::all()
            .iter()
            .copied()
            .filter(|p| self.can_access(*p))
            .collect()
    }

    /// Shortcuts offered on the dashboard
    pub fn quick_actions(&self) -> &'static [Page] {
        match self {
            Self::Admin => &[Page::Transactions, Page::Reports, Page::Budget],
            Self::Viewer => &[Page::Reports],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Transactions,
    Budget,
    Events,
    Fundraising,
    Reports,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Self] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budget,
            Self::Events,
            Self::Fundraising,
            Self::Reports,
            Self::Settings,
        ]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Budget => "Budget",
            Self::Events => "Events",
            Self::Fundraising => "Fundraising",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        };
        write!(f, "{}", s)
    }
}
