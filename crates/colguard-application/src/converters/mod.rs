//! Protected value converters
//!
//! A converter binds one field to a provider name and translates between the
//! value the application works with and the value that is stored. It holds no
//! key material; every conversion resolves the provider through the
//! protection service, so keys are derived on the first conversion.

use crate::domain_services::ProtectionServiceInterface;
use colguard_domain::constants::DEFAULT_PROVIDER_NAME;
use colguard_domain::error::Result;
use std::sync::Arc;

/// Two-way conversion between a model value and its stored form
pub trait ValueConverter: Send + Sync {
    /// Value as seen by the application
    type Model;
    /// Value as written to storage
    type Store;

    /// Convert a model value into its stored form
    fn to_store(&self, value: &Self::Model) -> Result<Self::Store>;

    /// Convert a stored value back into a model value
    fn from_store(&self, value: &Self::Store) -> Result<Self::Model>;
}

/// Encrypts nullable text fields
///
/// `None` is stored as the empty string and read back as `None`, so absent
/// values never reach the cipher.
#[derive(Clone)]
pub struct ProtectedStringConverter {
    service: Arc<dyn ProtectionServiceInterface>,
    provider: String,
}

impl ProtectedStringConverter {
    /// Bind the converter to the default provider
    pub fn new(service: Arc<dyn ProtectionServiceInterface>) -> Self {
        Self::with_provider(service, DEFAULT_PROVIDER_NAME)
    }

    /// Bind the converter to a named provider
    pub fn with_provider(
        service: Arc<dyn ProtectionServiceInterface>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            service,
            provider: provider.into(),
        }
    }

    /// Provider this converter encrypts with
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

impl ValueConverter for ProtectedStringConverter {
    type Model = Option<String>;
    type Store = String;

    fn to_store(&self, value: &Option<String>) -> Result<String> {
        match value {
            Some(text) => self.service.encrypt_text(&self.provider, text),
            None => Ok(String::new()),
        }
    }

    fn from_store(&self, value: &String) -> Result<Option<String>> {
        if value.is_empty() {
            return Ok(None);
        }
        self.service.decrypt_text(&self.provider, value).map(Some)
    }
}

/// Encrypts binary fields
#[derive(Clone)]
pub struct ProtectedBytesConverter {
    service: Arc<dyn ProtectionServiceInterface>,
    provider: String,
}

impl ProtectedBytesConverter {
    /// Bind the converter to the default provider
    pub fn new(service: Arc<dyn ProtectionServiceInterface>) -> Self {
        Self::with_provider(service, DEFAULT_PROVIDER_NAME)
    }

    /// Bind the converter to a named provider
    pub fn with_provider(
        service: Arc<dyn ProtectionServiceInterface>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            service,
            provider: provider.into(),
        }
    }

    /// Provider this converter encrypts with
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

impl ValueConverter for ProtectedBytesConverter {
    type Model = Vec<u8>;
    type Store = Vec<u8>;

    fn to_store(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        self.service.encrypt_bytes(&self.provider, value)
    }

    fn from_store(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        self.service.decrypt_bytes(&self.provider, value)
    }
}
