//! Derived key material

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric key and initialization vector derived for one provider
///
/// Opaque to the registry. The IV is fixed for the lifetime of the provider,
/// so equal plaintexts encrypt to equal ciphertexts under the same provider.
/// Buffers are zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl KeyMaterial {
    /// Create key material from raw key and IV bytes
    pub fn new(key: Vec<u8>, iv: Vec<u8>) -> Self {
        Self { key, iv }
    }

    /// Split one derived buffer into `key_len` key bytes and the remaining IV bytes
    ///
    /// Returns `None` when the buffer is not longer than `key_len`.
    pub fn split(mut derived: Vec<u8>, key_len: usize) -> Option<Self> {
        if derived.len() <= key_len {
            derived.zeroize();
            return None;
        }
        let iv = derived.split_off(key_len);
        Some(Self { key: derived, iv })
    }

    /// The symmetric key
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
