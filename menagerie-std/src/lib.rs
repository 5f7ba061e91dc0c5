//! # menagerie-std
//!
//! Standard implementations for the Menagerie voice dispatch library.
//!
//! This crate provides:
//! - **Standard voices**: [`Dog`], [`Cat`]
//! - **Tagged dispatch**: [`KnownVoice`]
//! - **Delivery**: [`emit`], [`announce`]
//! - **Dynamic collections**: [`Ensemble`]
//! - **Testing utilities**: [`RecordingSink`], [`CountingVoice`]
//!
//! [`Dog`]: voices::Dog
//! [`Cat`]: voices::Cat
//! [`KnownVoice`]: tagged::KnownVoice
//! [`emit`]: emit::emit
//! [`announce`]: emit::announce
//! [`Ensemble`]: ensemble::Ensemble
//! [`RecordingSink`]: testing::RecordingSink
//! [`CountingVoice`]: testing::CountingVoice

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use menagerie_core;

// Modules
pub mod emit;
pub mod ensemble;
pub mod tagged;
pub mod testing;
pub mod voices;
