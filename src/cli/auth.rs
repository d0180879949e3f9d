//! Keyring-based credential storage for the MediaVault server
//!
//! Credentials live as one serialized entry under the `mediavault`
//! service, so a partial write cannot leave the keyring with a URL but
//! no password.

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const KEYRING_SERVICE: &str = "mediavault";
const KEYRING_KEY: &str = "credentials";

/// MediaVault server credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultCredentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl VaultCredentials {
    fn new(url: String, username: String, password: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }
}

/// Manages authentication credentials storage
pub struct AuthManager;

impl AuthManager {
    /// Authenticate with the MediaVault server
    ///
    /// Tries to load credentials from keyring first, or prompts for new ones.
    /// Verifies credentials work before storing.
    pub async fn authenticate(
        url: Option<String>,
        username: Option<String>,
        password: Option<String>,
        force: bool,
    ) -> Result<VaultCredentials> {
        // Try to load existing credentials if not forcing re-auth
        if !force {
            if let Ok(creds) = Self::load() {
                info!("Found existing credentials in keyring");
                return Ok(creds);
            }
        } else {
            debug!("Force flag set, ignoring stored credentials");
        }

        let creds = Self::prompt_missing(url, username, password)?;

        // Verify credentials work
        Self::verify(&creds).await?;

        // Store credentials
        Self::store(&creds)?;
        info!("Credentials stored in keyring");

        Ok(creds)
    }

    /// Fill in whatever login/env did not supply
    fn prompt_missing(
        url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<VaultCredentials> {
        let url = match url {
            Some(url) => url,
            None => Input::new()
                .with_prompt("MediaVault server URL")
                .interact_text()
                .context("Failed to read URL")?,
        };

        let username = match username {
            Some(username) => username,
            None => Input::new()
                .with_prompt("Username")
                .interact_text()
                .context("Failed to read username")?,
        };

        let password = match password {
            Some(password) => password,
            None => Password::new()
                .with_prompt("Password")
                .interact()
                .context("Failed to read password")?,
        };

        Ok(VaultCredentials::new(url, username, password))
    }

    /// Load credentials from keyring
    pub fn load() -> Result<VaultCredentials> {
        let raw = Self::entry()?
            .get_password()
            .context("No MediaVault credentials in keyring")?;

        serde_json::from_str(&raw)
            .context("Stored credentials are unreadable; run 'mediavault login --force'")
    }

    /// Store credentials in keyring
    pub fn store(creds: &VaultCredentials) -> Result<()> {
        let raw = serde_json::to_string(creds).context("Failed to serialize credentials")?;

        Self::entry()?
            .set_password(&raw)
            .context("Failed to store credentials in keyring")?;

        debug!("Credentials stored in keyring");
        Ok(())
    }

    /// Clear stored credentials
    pub fn clear() -> Result<()> {
        let _ = Self::entry()?.delete_credential();
        info!("Credentials cleared from keyring");
        Ok(())
    }

    /// Verify credentials against the server's login endpoint
    async fn verify(creds: &VaultCredentials) -> Result<()> {
        use crate::remote::VaultClient;

        debug!("Verifying credentials against {}", creds.url);

        let client = VaultClient::new(&creds.url)?;
        let identity = client
            .login(&creds.username, &creds.password)
            .await
            .context("Failed to verify credentials")?;

        info!("Credentials verified for '{}'", identity);
        Ok(())
    }

    fn entry() -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, KEYRING_KEY).context("Failed to access keyring")
    }
}
