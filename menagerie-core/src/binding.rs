//! # Reference Layer (Binding)
//!
//! An owning reference to the [`Voice`] abstraction that may be bound, and
//! later rebound, to any variant.
//!
//! A `Binding` is the call site's handle: code holding one never learns the
//! concrete type behind it. Every invocation resolves through whichever
//! variant is bound *at that moment* — rebinding between calls changes the
//! output of the next call, and nothing is cached across rebinds.

use crate::voice::Voice;
use std::fmt;

/// A rebindable reference to a [`Voice`].
///
/// # Example
///
/// ```rust,ignore
/// let mut binding = Binding::new(Dog);
/// assert_eq!(binding.sound(), "Bark");
///
/// binding.rebind(Cat);
/// assert_eq!(binding.sound(), "Meow");
/// ```
pub struct Binding {
    inner: Box<dyn Voice>,
}

impl Binding {
    /// Binds to the given variant.
    pub fn new<V: Voice + 'static>(voice: V) -> Self {
        Self {
            inner: Box::new(voice),
        }
    }

    /// Rebinds to another variant, dropping the previous one.
    pub fn rebind<V: Voice + 'static>(&mut self, voice: V) {
        self.inner = Box::new(voice);
    }

    /// Rebinds to another variant and returns the previously bound one.
    pub fn replace<V: Voice + 'static>(&mut self, voice: V) -> Box<dyn Voice> {
        std::mem::replace(&mut self.inner, Box::new(voice))
    }

    /// Borrows the currently bound variant as a trait object.
    pub fn as_dyn(&self) -> &dyn Voice {
        self.inner.as_ref()
    }
}

impl Voice for Binding {
    fn sound(&self) -> &'static str {
        self.inner.sound()
    }
}

impl From<Box<dyn Voice>> for Binding {
    fn from(inner: Box<dyn Voice>) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("sound", &self.inner.sound())
            .finish()
    }
}
