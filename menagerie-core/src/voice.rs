//! # Behavioral Abstraction Layer (Voice)
//!
//! The capability contract at the bottom of Menagerie: "can produce a
//! sound". Every variant implements this one operation with its own fixed
//! line; nothing else is promised.
//!
//! # Dispatch
//!
//! The trait is object-safe. Invoking [`Voice::sound`] through a
//! `&dyn Voice`, `Box<dyn Voice>`, or [`Binding`] resolves to the
//! implementation of the *runtime-bound* variant, never to a default on the
//! abstraction (there is none) and never to the reference's declared type.
//!
//! [`Binding`]: crate::Binding

use std::sync::Arc;

/// A source of one fixed sound.
///
/// Implementors answer [`sound`](Voice::sound) with the same line every
/// time: the behavior is fully determined by which variant was constructed
/// and cannot change afterwards. There is no mutation API.
///
/// # Static vs Dynamic Dispatch
///
/// Calling `sound` on a concrete type is statically dispatched. For runtime
/// selection, use the trait object form (`&dyn Voice`) or a [`Binding`].
///
/// [`Binding`]: crate::Binding
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Voice`",
    label = "missing `Voice` implementation",
    note = "Voices must implement the `sound` method returning their fixed line."
)]
pub trait Voice: Send + Sync {
    /// The line this voice produces. Fixed for the lifetime of the value.
    fn sound(&self) -> &'static str;
}

// Pass-through implementations: a voice behind an ordinary pointer still
// dispatches to the pointee's runtime identity.

impl<V: Voice + ?Sized> Voice for &V {
    fn sound(&self) -> &'static str {
        (**self).sound()
    }
}

impl<V: Voice + ?Sized> Voice for Box<V> {
    fn sound(&self) -> &'static str {
        (**self).sound()
    }
}

impl<V: Voice + ?Sized> Voice for Arc<V> {
    fn sound(&self) -> &'static str {
        (**self).sound()
    }
}
