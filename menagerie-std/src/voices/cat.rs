//! The feline voice.

use menagerie_core::Voice;

/// A voice that meows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cat;

impl Voice for Cat {
    fn sound(&self) -> &'static str {
        "Meow"
    }
}
