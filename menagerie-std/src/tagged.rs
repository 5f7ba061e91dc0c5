//! Tagged-variant dispatch.
//!
//! The static counterpart of `&dyn Voice`: every standard variant in one
//! enum, dispatched by `match` with no vtable indirection. Use this path
//! when the set of variants is closed at compile time; reach for trait
//! objects when it is decided at runtime.

use crate::voices::{Cat, Dog};
use menagerie_core::Voice;

/// Every standard voice, as a single dispatchable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnownVoice {
    /// See [`Dog`].
    Dog(Dog),
    /// See [`Cat`].
    Cat(Cat),
}

impl Voice for KnownVoice {
    fn sound(&self) -> &'static str {
        match self {
            KnownVoice::Dog(voice) => voice.sound(),
            KnownVoice::Cat(voice) => voice.sound(),
        }
    }
}

impl From<Dog> for KnownVoice {
    fn from(voice: Dog) -> Self {
        KnownVoice::Dog(voice)
    }
}

impl From<Cat> for KnownVoice {
    fn from(voice: Cat) -> Self {
        KnownVoice::Cat(voice)
    }
}
