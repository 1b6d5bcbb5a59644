//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The domain
//! defines them; infrastructure implements them.
//!
//! - **providers/** - External service provider ports (cryptographic primitives)

/// External service provider ports
pub mod providers;

pub use providers::CryptoPrimitives;
