//! Domain Services
//!
//! Interfaces for the services callers use to protect values.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ProtectionServiceInterface`] | Encrypt/decrypt values by provider name |

/// Protection domain service interface
pub mod protection;

pub use protection::ProtectionServiceInterface;
