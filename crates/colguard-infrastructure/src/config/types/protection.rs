//! Protection provider configuration types

use colguard_domain::constants::{MIN_PASSWORD_LENGTH, MIN_SALT_LENGTH};
use colguard_domain::error::{Error, Result};
use colguard_domain::value_objects::{Credential, CredentialSet, ProviderName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Credentials for one named provider, as written in configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Provider name (unique, case-insensitive)
    pub name: String,

    /// Password the key material is derived from
    pub password: String,

    /// Salt mixed into the derivation
    pub salt: String,

    /// PBKDF2 iteration count; raised to the floor when lower
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
}

impl CredentialConfig {
    /// Create a credential entry
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        salt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            salt: salt.into(),
            iterations: None,
        }
    }

    /// Set the iteration count
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .field("iterations", &self.iterations)
            .finish()
    }
}

/// Protection provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtectionConfig {
    /// Credentials for named providers
    #[serde(default)]
    pub credentials: Vec<CredentialConfig>,
}

impl ProtectionConfig {
    /// Create a configuration from credential entries
    pub fn new(credentials: Vec<CredentialConfig>) -> Self {
        Self { credentials }
    }

    /// Check every credential entry
    ///
    /// Names must be present and unique ignoring case, passwords at least
    /// [`MIN_PASSWORD_LENGTH`] characters, salts at least [`MIN_SALT_LENGTH`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, credential) in self.credentials.iter().enumerate() {
            if credential.name.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "protection credential #{index} has no name"
                )));
            }
            if credential.password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(Error::configuration(format!(
                    "password for provider '{}' must be at least {} characters",
                    credential.name, MIN_PASSWORD_LENGTH
                )));
            }
            if credential.salt.chars().count() < MIN_SALT_LENGTH {
                return Err(Error::configuration(format!(
                    "salt for provider '{}' must be at least {} characters",
                    credential.name, MIN_SALT_LENGTH
                )));
            }
            if !seen.insert(ProviderName::normalize(&credential.name)) {
                return Err(Error::configuration(format!(
                    "credentials for provider '{}' are defined more than once",
                    credential.name
                )));
            }
        }
        Ok(())
    }

    /// Validate and convert into the immutable domain credential set
    pub fn credential_set(&self) -> Result<CredentialSet> {
        self.validate()?;
        let credentials = self
            .credentials
            .iter()
            .map(|c| {
                Credential::new(&c.name, &c.password, &c.salt, c.iterations).map_err(|e| {
                    Error::configuration_with_source(
                        format!("invalid credentials for provider '{}'", c.name),
                        e,
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        CredentialSet::new(credentials)
    }
}
