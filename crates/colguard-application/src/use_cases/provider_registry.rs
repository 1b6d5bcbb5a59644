//! Provider Registry Use Case
//!
//! Maps provider names to derived key material and performs encrypt/decrypt
//! through it. Key material for a name is derived on first demand, at most
//! once, and kept for the lifetime of the registry. Entries are never
//! replaced or evicted.
//!
//! The registry is an explicit object: build one per process (or per test)
//! and share it behind an `Arc`.
//!
//! Each name maps to a slot that is filled at most once. The map lock is
//! held only to find or insert the slot; derivation runs on the slot, so a
//! slow derivation blocks callers of that name and nobody else.
//!
//! ## Fixed IV
//!
//! Each provider has a single IV derived from its password and salt, and no
//! per-message nonce is generated. Equal plaintexts therefore encrypt to
//! equal ciphertexts under one provider. Callers that need to hide repeated
//! values must not rely on this registry for it.

use crate::domain_services::ProtectionServiceInterface;
use colguard_domain::constants::DERIVATION_HASH_ALGORITHM;
use colguard_domain::error::{Error, Result};
use colguard_domain::ports::CryptoPrimitives;
use colguard_domain::value_objects::{CredentialSet, KeyMaterial, ProtectionOperation, ProviderName};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A resolved provider: its name and the key material derived for it
///
/// Immutable once constructed and owned by the registry; callers hold it
/// through an `Arc`.
#[derive(Debug)]
pub struct ProviderEntry {
    name: ProviderName,
    key_material: KeyMaterial,
    iterations: u32,
}

impl ProviderEntry {
    fn new(name: ProviderName, key_material: KeyMaterial, iterations: u32) -> Self {
        Self {
            name,
            key_material,
            iterations,
        }
    }

    /// Provider name as first requested
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Derived key and IV
    pub fn key_material(&self) -> &KeyMaterial {
        &self.key_material
    }

    /// Iteration count the key material was derived with
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// A provider's entry once its key material has been derived
type ProviderSlot = OnceCell<Arc<ProviderEntry>>;

/// Named provider registry
///
/// # Example
///
/// ```ignore
/// let registry = ProviderRegistry::new(credentials, Arc::new(Pbkdf2AesGcmPrimitives::new()));
///
/// let sealed = registry.encrypt_text("Default", "secret")?;
/// assert_eq!(registry.decrypt_text("Default", &sealed)?, "secret");
/// ```
pub struct ProviderRegistry {
    credentials: CredentialSet,
    crypto: Arc<dyn CryptoPrimitives>,
    /// Lower-cased provider name -> slot; slots stay empty after a failed derivation
    entries: DashMap<String, Arc<ProviderSlot>>,
}

impl ProviderRegistry {
    /// Create an empty registry over a credential set and crypto primitives
    pub fn new(credentials: CredentialSet, crypto: Arc<dyn CryptoPrimitives>) -> Self {
        Self {
            credentials,
            crypto,
            entries: DashMap::new(),
        }
    }

    /// Return the provider for `name`, deriving its key material if needed
    ///
    /// Lookup ignores case. Concurrent callers for the same name observe a
    /// single derivation and wait for it; callers for other names do not.
    /// Never fails with `DuplicateProvider`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty name
    /// - `Configuration` when no credential matches the name
    /// - `Crypto` when the primitive fails to derive key material
    pub fn get_or_create(&self, name: &str) -> Result<Arc<ProviderEntry>> {
        let name = ProviderName::parse(name)?;
        let slot = self.slot(&name)?;
        slot.get_or_try_init(|| self.derive_entry(&name).map(Arc::new))
            .map(Arc::clone)
    }

    /// Return the provider named [`colguard_domain::constants::DEFAULT_PROVIDER_NAME`]
    pub fn get_or_create_default(&self) -> Result<Arc<ProviderEntry>> {
        self.get_or_create(ProviderName::default_name().as_str())
    }

    /// Explicitly register a new provider
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateProvider` when the name was already resolved,
    /// whether through this method or through [`ProviderRegistry::get_or_create`].
    /// Otherwise fails like [`ProviderRegistry::get_or_create`].
    pub fn create(&self, name: &str) -> Result<Arc<ProviderEntry>> {
        let name = ProviderName::parse(name)?;
        let slot = self.slot(&name)?;

        let mut derived_here = false;
        let entry = slot.get_or_try_init(|| {
            derived_here = true;
            self.derive_entry(&name).map(Arc::new)
        })?;

        if !derived_here {
            warn!(provider = %name, "provider name has already been used");
            return Err(Error::duplicate_provider(name.as_str()));
        }
        Ok(Arc::clone(entry))
    }

    /// Resolve every configured provider up front
    ///
    /// Surfaces configuration and derivation failures at startup instead of
    /// on the first protected value. Returns the number of resolved providers.
    pub fn warm_up(&self) -> Result<usize> {
        for credential in &self.credentials {
            self.get_or_create(credential.name())?;
        }
        Ok(self.len())
    }

    /// Return an already resolved provider without deriving
    pub fn get(&self, name: &str) -> Option<Arc<ProviderEntry>> {
        let slot = self
            .entries
            .get(&ProviderName::normalize(name))
            .map(|slot| Arc::clone(slot.value()))?;
        slot.get().cloned()
    }

    /// Whether a provider has already been resolved
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of resolved providers, sorted
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .resolved()
            .iter()
            .map(|entry| entry.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Number of resolved providers
    pub fn len(&self) -> usize {
        self.resolved().len()
    }

    /// Whether no provider has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The credential set providers are resolved from
    pub fn credentials(&self) -> &CredentialSet {
        &self.credentials
    }

    /// Find or insert the slot for `name`
    ///
    /// Names without credentials never get a slot. The map guard is dropped
    /// before the slot is returned.
    fn slot(&self, name: &ProviderName) -> Result<Arc<ProviderSlot>> {
        if self.credentials.find(name).is_none() {
            return Err(Error::missing_credentials(name.as_str()));
        }
        if let Some(slot) = self.entries.get(name.key()) {
            return Ok(Arc::clone(slot.value()));
        }
        let slot = self.entries.entry(name.key().to_string()).or_default();
        Ok(Arc::clone(slot.value()))
    }

    /// Entries whose key material has been derived
    fn resolved(&self) -> Vec<Arc<ProviderEntry>> {
        self.entries
            .iter()
            .filter_map(|slot| slot.value().get().cloned())
            .collect()
    }

    fn derive_entry(&self, name: &ProviderName) -> Result<ProviderEntry> {
        let credential = self
            .credentials
            .find(name)
            .ok_or_else(|| Error::missing_credentials(name.as_str()))?;

        let iterations = credential.effective_iterations();
        if let Some(requested) = credential.iterations() {
            if requested < iterations {
                warn!(
                    provider = %name,
                    requested,
                    iterations,
                    "configured iteration count is below the floor, raising it"
                );
            }
        }

        debug!(provider = %name, iterations, "deriving key material");
        let key_material = self
            .crypto
            .derive_key_material(
                credential.password(),
                credential.salt(),
                DERIVATION_HASH_ALGORITHM,
                iterations,
            )
            .map_err(|e| {
                Error::crypto_with_source(
                    format!("failed to derive key material for provider '{name}'"),
                    e,
                )
            })?;

        info!(
            provider = %name,
            iterations,
            algorithm = %DERIVATION_HASH_ALGORITHM,
            primitives = self.crypto.provider_name(),
            "protection provider created"
        );
        Ok(ProviderEntry::new(name.clone(), key_material, iterations))
    }

    /// Resolve the provider and run one cipher step, re-signaling any failure
    /// as `Protection`
    fn protect<T>(
        &self,
        provider: &str,
        operation: ProtectionOperation,
        apply: impl FnOnce(&dyn CryptoPrimitives, &KeyMaterial) -> Result<T>,
    ) -> Result<T> {
        self.get_or_create(provider)
            .and_then(|entry| apply(self.crypto.as_ref(), entry.key_material()))
            .map_err(|source| {
                warn!(
                    provider,
                    operation = operation.as_str(),
                    error = %source,
                    "protection operation failed"
                );
                Error::protection(provider, operation, source)
            })
    }
}

impl ProtectionServiceInterface for ProviderRegistry {
    fn encrypt_text(&self, provider: &str, plaintext: &str) -> Result<String> {
        self.protect(provider, ProtectionOperation::EncryptText, |crypto, material| {
            crypto.encrypt_text(material, plaintext)
        })
    }

    fn decrypt_text(&self, provider: &str, ciphertext: &str) -> Result<String> {
        self.protect(provider, ProtectionOperation::DecryptText, |crypto, material| {
            crypto.decrypt_text(material, ciphertext)
        })
    }

    fn encrypt_bytes(&self, provider: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.protect(provider, ProtectionOperation::EncryptBytes, |crypto, material| {
            crypto.encrypt_bytes(material, plaintext)
        })
    }

    fn decrypt_bytes(&self, provider: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.protect(provider, ProtectionOperation::DecryptBytes, |crypto, material| {
            crypto.decrypt_bytes(material, ciphertext)
        })
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("credentials", &self.credentials.len())
            .field("providers", &self.provider_names())
            .field("primitives", &self.crypto.provider_name())
            .finish()
    }
}
