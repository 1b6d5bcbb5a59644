//! Provider credentials
//!
//! A credential binds a provider name to the password and salt its key
//! material is derived from. The set of credentials is supplied once by the
//! host and never mutated afterwards.

use crate::constants::{DEFAULT_DERIVATION_ITERATIONS, MIN_DERIVATION_ITERATIONS, MIN_SALT_LENGTH};
use crate::error::{Error, Result};
use crate::value_objects::ProviderName;
use std::fmt;

/// Password, salt and iteration count for one named provider
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    name: String,
    password: String,
    salt: String,
    iterations: Option<u32>,
}

impl Credential {
    /// Create a credential, checking the per-record invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty name or password, or a salt
    /// shorter than [`MIN_SALT_LENGTH`] characters.
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        salt: impl Into<String>,
        iterations: Option<u32>,
    ) -> Result<Self> {
        let credential = Self {
            name: name.into(),
            password: password.into(),
            salt: salt.into(),
            iterations,
        };
        credential.validate()?;
        Ok(credential)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("credential name cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_argument(format!(
                "password for provider '{}' cannot be empty",
                self.name
            )));
        }
        if self.salt.chars().count() < MIN_SALT_LENGTH {
            return Err(Error::invalid_argument(format!(
                "salt for provider '{}' must be at least {} characters",
                self.name, MIN_SALT_LENGTH
            )));
        }
        Ok(())
    }

    /// Provider name this credential belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Password the key is derived from
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Salt the key is derived with
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Iteration count as configured
    pub fn iterations(&self) -> Option<u32> {
        self.iterations
    }

    /// Iteration count actually used for derivation
    ///
    /// Never below [`MIN_DERIVATION_ITERATIONS`], whatever was configured.
    pub fn effective_iterations(&self) -> u32 {
        self.iterations
            .unwrap_or(DEFAULT_DERIVATION_ITERATIONS)
            .max(MIN_DERIVATION_ITERATIONS)
    }

    /// Whether this credential belongs to `name`, ignoring case
    pub fn matches(&self, name: &ProviderName) -> bool {
        name.matches(&self.name)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .field("iterations", &self.iterations)
            .finish()
    }
}

/// Immutable set of credentials, unique by case-insensitive name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    credentials: Vec<Credential>,
}

impl CredentialSet {
    /// Build a set from individual credentials
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when two credentials share a name.
    pub fn new(credentials: Vec<Credential>) -> Result<Self> {
        for (index, credential) in credentials.iter().enumerate() {
            let key = ProviderName::normalize(credential.name());
            if credentials[..index]
                .iter()
                .any(|earlier| ProviderName::normalize(earlier.name()) == key)
            {
                return Err(Error::configuration(format!(
                    "credentials for provider '{}' are defined more than once",
                    credential.name()
                )));
            }
        }
        Ok(Self { credentials })
    }

    /// Find the credential for a provider, ignoring case
    pub fn find(&self, name: &ProviderName) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.matches(name))
    }

    /// All credentials, in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter()
    }

    /// Configured provider names, in configuration order
    pub fn names(&self) -> Vec<&str> {
        self.credentials.iter().map(Credential::name).collect()
    }

    /// Number of credentials
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl<'a> IntoIterator for &'a CredentialSet {
    type Item = &'a Credential;
    type IntoIter = std::slice::Iter<'a, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.credentials.iter()
    }
}
