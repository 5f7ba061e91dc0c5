//! # menagerie-core
//!
//! Core traits for the Menagerie voice dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! anything that wants to supply its own voices without pulling in the
//! standard implementations from `menagerie-std`.
//!
//! # Two-Layer Architecture
//!
//! ## Layer 1: Behavioral Abstraction ([`Voice`])
//!
//! The capability contract: "can produce a sound". One operation, no
//! parameters; each implementor answers with its own fixed line. The trait
//! is object-safe, so a `&dyn Voice` or `Box<dyn Voice>` resolves the
//! operation through the value's runtime identity, not its declared type.
//!
//! ## Layer 2: Reference ([`Binding`])
//!
//! An owning, rebindable reference to the abstraction. A `Binding` may hold
//! any variant, be rebound to another at any time, and always dispatches to
//! whichever variant is bound at the moment of the call.
//!
//! # Error Types
//!
//! - [`MenagerieError`] - Top-level error type
//! - [`EmitError`] - Failures while delivering a sound to an output stream

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binding;
mod error;
mod voice;

// Re-exports
pub use binding::Binding;
pub use error::{BoxError, EmitError, MenagerieError};
pub use voice::Voice;
