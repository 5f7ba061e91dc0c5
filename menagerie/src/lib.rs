//! # menagerie - Voice Dispatch Library
//!
//! `menagerie` models one thing: a behavioral abstraction ("can produce a
//! sound") whose implementation is selected by the *runtime* identity of
//! the value behind a reference, not by the reference's declared type.
//!
//! Both dispatch paths are first-class. The tagged enum ([`KnownVoice`]) is
//! the static path for a closed set of variants; trait objects and
//! [`Binding`] are the dynamic escape hatch when the variant is decided at
//! runtime.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use menagerie::{Binding, Cat, Dog, Voice, emit};
//!
//! let mut binding = Binding::new(Dog);
//! emit(&binding, &mut std::io::stdout())?;   // Bark
//!
//! binding.rebind(Cat);
//! emit(&binding, &mut std::io::stdout())?;   // Meow
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use menagerie_core::{
    // Reference
    Binding,
    // Error types
    BoxError,
    EmitError,
    MenagerieError,
    // Abstraction
    Voice,
};

pub use menagerie_std::{
    emit::{announce, emit},
    ensemble::{Ensemble, EnsembleBuilder},
    tagged::KnownVoice,
    voices::{Cat, Dog},
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use menagerie_std::testing::*;
}

/// Prelude module - common imports for Menagerie.
///
/// # Usage
///
/// ```rust,ignore
/// use menagerie::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Reference
        Binding,
        // Errors
        BoxError,
        // Standard voices
        Cat,
        Dog,
        EmitError,
        // Collections
        Ensemble,
        // Static path
        KnownVoice,
        MenagerieError,
        // Abstraction
        Voice,
        announce,
        // Delivery
        emit,
    };
}
