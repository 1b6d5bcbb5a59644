//! Application Layer - colguard
//!
//! Resolves named protection providers to derived key material and performs
//! encrypt/decrypt operations through them.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the protection service interface callers depend on
//! - Implements it with [`ProviderRegistry`], which derives key material at
//!   most once per provider name and caches it for its own lifetime
//! - Offers value converters that bind a provider name to a field
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `colguard-domain`: credentials, key material, errors and the crypto port
//! - Pure Rust libraries for concurrency and logging

pub mod converters;
pub mod domain_services;
pub mod use_cases;

pub use converters::{ProtectedBytesConverter, ProtectedStringConverter, ValueConverter};
pub use domain_services::ProtectionServiceInterface;
pub use use_cases::{ProviderEntry, ProviderRegistry};
