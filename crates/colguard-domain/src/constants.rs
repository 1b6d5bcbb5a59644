//! Domain layer constants
//!
//! Policy values that every layer must agree on. Infrastructure-specific
//! constants (file names, env prefixes, log defaults) live in
//! `colguard_infrastructure::constants`.

use crate::value_objects::HashAlgorithm;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Provider name used when the caller does not name one
pub const DEFAULT_PROVIDER_NAME: &str = "Default";

// ============================================================================
// KEY DERIVATION CONSTANTS
// ============================================================================

/// Iteration floor for key derivation; configured counts below it are raised
pub const MIN_DERIVATION_ITERATIONS: u32 = 10_000;

/// Iteration count used when a credential does not specify one
pub const DEFAULT_DERIVATION_ITERATIONS: u32 = MIN_DERIVATION_ITERATIONS;

/// Hash algorithm passed to the derivation primitive
pub const DERIVATION_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha512;

// ============================================================================
// CREDENTIAL CONSTANTS
// ============================================================================

/// Minimum salt length in characters
pub const MIN_SALT_LENGTH: usize = 16;

/// Minimum password length accepted by configuration validation
pub const MIN_PASSWORD_LENGTH: usize = 10;

// ============================================================================
// CIPHER CONSTANTS
// ============================================================================

/// AES-256 key size in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES-GCM IV (nonce) size in bytes
pub const AES_GCM_IV_SIZE: usize = 12;
