pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{KonnectorError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
use clap::Parser;

pub const SCALINGO_AUTH_ENDPOINT: &str = "https://auth.scalingo.com/v1/tokens/exchange";
pub const SCALINGO_INVOICES_ENDPOINT: &str = "https://api.scalingo.com/v1/account/invoices";

/// Account fields supplied by the host platform, or in standalone mode read
/// from a JSON fields file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AccountFields {
    pub token: Option<String>,
    #[serde(rename = "folderPath")]
    pub folder_path: Option<String>,
}

impl AccountFields {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "scalingo-konnector")]
#[command(about = "Fetches Scalingo invoices and saves them as normalized bill documents")]
pub struct CliConfig {
    /// Account token exchanged for a bearer token.
    #[arg(long)]
    pub token: Option<String>,

    /// Destination folder for saved documents.
    #[arg(long)]
    pub folder_path: Option<String>,

    /// JSON file with account fields: {"token": "...", "folderPath": "..."}.
    /// Explicit flags win over values from this file.
    #[arg(long)]
    pub fields: Option<std::path::PathBuf>,

    #[arg(long, default_value = SCALINGO_AUTH_ENDPOINT)]
    pub auth_endpoint: String,

    #[arg(long, default_value = SCALINGO_INVOICES_ENDPOINT)]
    pub invoices_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(self) -> Result<ResolvedConfig> {
        let file_fields = match &self.fields {
            Some(path) => AccountFields::from_file(path)?,
            None => AccountFields::default(),
        };

        let token = self
            .token
            .or(file_fields.token)
            .ok_or_else(|| KonnectorError::MissingConfig {
                field: "token".to_string(),
            })?;
        let folder_path =
            self.folder_path
                .or(file_fields.folder_path)
                .ok_or_else(|| KonnectorError::MissingConfig {
                    field: "folderPath".to_string(),
                })?;

        Ok(ResolvedConfig {
            token,
            folder_path,
            auth_endpoint: self.auth_endpoint,
            invoices_endpoint: self.invoices_endpoint,
        })
    }
}

/// Fully resolved run configuration: account fields merged with endpoint
/// settings.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub token: String,
    pub folder_path: String,
    pub auth_endpoint: String,
    pub invoices_endpoint: String,
}

impl ConfigProvider for ResolvedConfig {
    fn auth_endpoint(&self) -> &str {
        &self.auth_endpoint
    }

    fn invoices_endpoint(&self) -> &str {
        &self.invoices_endpoint
    }

    fn folder_path(&self) -> &str {
        &self.folder_path
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("token", &self.token)?;
        validate_path("folderPath", &self.folder_path)?;
        validate_url("auth_endpoint", &self.auth_endpoint)?;
        validate_url("invoices_endpoint", &self.invoices_endpoint)?;
        Ok(())
    }
}
