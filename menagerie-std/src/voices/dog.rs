//! The canine voice.

use menagerie_core::Voice;

/// A voice that barks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dog;

impl Voice for Dog {
    fn sound(&self) -> &'static str {
        "Bark"
    }
}
