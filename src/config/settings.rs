//! Committee settings
//!
//! Organisation name, display preferences and the committee roster. The
//! currency code only affects display; amounts are stored without one.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::money::CURRENCY_CODE;
use crate::models::Authorizer;

const UNASSIGNED: &str = "TBD";

/// Who holds each committee office
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeRoster {
    #[serde(default = "unassigned")]
    pub chair: String,
    #[serde(default = "unassigned")]
    pub deputy_chair: String,
    #[serde(default = "unassigned")]
    pub treasurer: String,
    #[serde(default = "unassigned")]
    pub secretary: String,
    #[serde(default = "unassigned")]
    pub events_coordinator: String,
}

fn unassigned() -> String {
    UNASSIGNED.to_string()
}

impl Default for CommitteeRoster {
    fn default() -> Self {
        Self {
            chair: unassigned(),
            deputy_chair: unassigned(),
            treasurer: unassigned(),
            secretary: unassigned(),
            events_coordinator: unassigned(),
        }
    }
}

impl CommitteeRoster {
    /// Offices in display order with their holders
    pub fn offices(&self) -> [(Authorizer, &str); 5] {
        [
            (Authorizer::Chair, self.chair.as_str()),
            (Authorizer::DeputyChair, self.deputy_chair.as_str()),
            (Authorizer::Treasurer, self.treasurer.as_str()),
            (Authorizer::Secretary, self.secretary.as_str()),
            (Authorizer::EventsCoordinator, self.events_coordinator.as_str()),
        ]
    }

    fn member_mut(&mut self, office: Authorizer) -> Option<&mut String> {
        match office {
            Authorizer::Chair => Some(&mut self.chair),
            Authorizer::DeputyChair => Some(&mut self.deputy_chair),
            Authorizer::Treasurer => Some(&mut self.treasurer),
            Authorizer::Secretary => Some(&mut self.secretary),
            Authorizer::EventsCoordinator => Some(&mut self.events_coordinator),
            Authorizer::SchoolAdmin | Authorizer::CommitteeVote => None,
        }
    }
}

/// Settings for one committee's ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_organization_name")]
    pub organization_name: String,

    /// Currency code shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions on the dashboard
    #[serde(default = "default_recent_transactions_limit")]
    pub recent_transactions_limit: usize,

    #[serde(default)]
    pub committee: CommitteeRoster,
}

fn default_schema_version() -> u32 {
    1
}

fn default_organization_name() -> String {
    "School Committee".to_string()
}

fn default_currency() -> String {
    CURRENCY_CODE.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_transactions_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            organization_name: default_organization_name(),
            currency_code: default_currency(),
            date_format: default_date_format(),
            recent_transactions_limit: default_recent_transactions_limit(),
            committee: CommitteeRoster::default(),
        }
    }
}

impl Settings {
    /// Keys accepted by [`Settings::set`]
    pub const KEYS: &'static [&'static str] = &[
        "organization_name",
        "currency_code",
        "date_format",
        "recent_transactions_limit",
        "chair",
        "deputy_chair",
        "treasurer",
        "secretary",
        "events_coordinator",
    ];

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Update one setting by key
    ///
    /// Committee offices may be given by key (`deputy_chair`) or by title
    /// (`Deputy Chair`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key.trim() {
            "organization_name" => self.organization_name = non_empty(key, value)?,
            "currency_code" => self.currency_code = non_empty(key, value)?.to_uppercase(),
            "date_format" => {
                if chrono::format::StrftimeItems::new(value)
                    .any(|item| matches!(item, chrono::format::Item::Error))
                {
                    return Err(LedgerError::Validation(format!(
                        "Invalid date format: {}",
                        value
                    )));
                }
                self.date_format = non_empty(key, value)?;
            }
            "recent_transactions_limit" => {
                self.recent_transactions_limit = value.parse().map_err(|_| {
                    LedgerError::Validation(format!(
                        "recent_transactions_limit must be a whole number, got '{}'",
                        value
                    ))
                })?;
            }
            other => {
                let member = other
                    .parse::<Authorizer>()
                    .ok()
                    .and_then(|office| self.committee.member_mut(office))
                    .ok_or_else(|| {
                        LedgerError::Validation(format!(
                            "Unknown setting '{}'. Valid keys: {}",
                            other,
                            Self::KEYS.join(", ")
                        ))
                    })?;
                *member = if value.is_empty() {
                    unassigned()
                } else {
                    value.to_string()
                };
            }
        }
        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, LedgerError> {
    if value.is_empty() {
        Err(LedgerError::Validation(format!("{} cannot be empty", key)))
    } else {
        Ok(value.to_string())
    }
}
