//! Shared fixtures and crypto test doubles

#![allow(dead_code)]

use colguard_domain::error::{Error, Result};
use colguard_domain::ports::CryptoPrimitives;
use colguard_domain::value_objects::{Credential, CredentialSet, HashAlgorithm, KeyMaterial};
use colguard_application::ProviderRegistry;
use colguard_infrastructure::Pbkdf2AesGcmPrimitives;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub const PASSWORD: &str = "correct horse battery staple";
pub const SALT: &str = "0123456789abcdef";

pub fn credential(name: &str, iterations: Option<u32>) -> Credential {
    Credential::new(name, PASSWORD, SALT, iterations).unwrap()
}

pub fn credentials(entries: Vec<Credential>) -> CredentialSet {
    CredentialSet::new(entries).unwrap()
}

/// Default + Billing providers with distinct passwords and salts
pub fn two_provider_set() -> CredentialSet {
    credentials(vec![
        credential("Default", None),
        Credential::new("Billing", "another long password", "fedcba9876543210", Some(20_000))
            .unwrap(),
    ])
}

pub fn registry(set: CredentialSet) -> ProviderRegistry {
    ProviderRegistry::new(set, Arc::new(Pbkdf2AesGcmPrimitives::new()))
}

/// Real primitives that count derivations and record iteration counts
#[derive(Default)]
pub struct CountingPrimitives {
    inner: Pbkdf2AesGcmPrimitives,
    derivations: AtomicUsize,
    iterations: Mutex<Vec<u32>>,
}

impl CountingPrimitives {
    pub fn derivations(&self) -> usize {
        self.derivations.load(Ordering::SeqCst)
    }

    pub fn iterations(&self) -> Vec<u32> {
        self.iterations.lock().unwrap().clone()
    }
}

impl CryptoPrimitives for CountingPrimitives {
    fn derive_key_material(
        &self,
        password: &str,
        salt: &str,
        algorithm: HashAlgorithm,
        iterations: u32,
    ) -> Result<KeyMaterial> {
        self.derivations.fetch_add(1, Ordering::SeqCst);
        self.iterations.lock().unwrap().push(iterations);
        self.inner
            .derive_key_material(password, salt, algorithm, iterations)
    }

    fn encrypt_bytes(&self, material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.inner.encrypt_bytes(material, plaintext)
    }

    fn decrypt_bytes(&self, material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.inner.decrypt_bytes(material, ciphertext)
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Primitives whose derivation always fails
pub struct FailingDerivation;

impl CryptoPrimitives for FailingDerivation {
    fn derive_key_material(
        &self,
        _password: &str,
        _salt: &str,
        _algorithm: HashAlgorithm,
        _iterations: u32,
    ) -> Result<KeyMaterial> {
        Err(Error::crypto("entropy source unavailable"))
    }

    fn encrypt_bytes(&self, _material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(plaintext.to_vec())
    }

    fn decrypt_bytes(&self, _material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(ciphertext.to_vec())
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Primitives that park the derivation for one password until released
///
/// Every other password gets fixed key material without running PBKDF2.
pub struct GatedDerivation {
    inner: Pbkdf2AesGcmPrimitives,
    gated_password: String,
    started: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl GatedDerivation {
    /// Returns the primitives, a receiver signalled when the gated derivation
    /// starts, and a sender that lets it finish
    pub fn new(gated_password: &str) -> (Self, Receiver<()>, Sender<()>) {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let primitives = Self {
            inner: Pbkdf2AesGcmPrimitives::new(),
            gated_password: gated_password.to_string(),
            started: Mutex::new(started_tx),
            release: Mutex::new(release_rx),
        };
        (primitives, started_rx, release_tx)
    }
}

impl CryptoPrimitives for GatedDerivation {
    fn derive_key_material(
        &self,
        password: &str,
        _salt: &str,
        _algorithm: HashAlgorithm,
        _iterations: u32,
    ) -> Result<KeyMaterial> {
        if password == self.gated_password {
            let _ = self.started.lock().unwrap().send(());
            let _ = self.release.lock().unwrap().recv();
        }
        Ok(KeyMaterial::new(vec![7u8; 32], vec![9u8; 12]))
    }

    fn encrypt_bytes(&self, material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.inner.encrypt_bytes(material, plaintext)
    }

    fn decrypt_bytes(&self, material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.inner.decrypt_bytes(material, ciphertext)
    }

    fn provider_name(&self) -> &str {
        "gated"
    }
}
