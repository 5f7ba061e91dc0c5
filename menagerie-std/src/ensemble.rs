//! Dynamic collections of voices.
//!
//! An [`Ensemble`] holds its members behind trait objects, so the concrete
//! mix is decided at runtime (plugins, config-driven line-ups). Members
//! never interact; the ensemble only fixes the order in which they are
//! heard.

use crate::emit::emit;
use menagerie_core::{EmitError, Voice};
use std::{io::Write, sync::Arc};

/// An ordered collection of voices.
pub struct Ensemble {
    voices: Vec<Arc<dyn Voice>>,
}

impl Ensemble {
    /// Create a builder for an ensemble.
    pub fn builder() -> EnsembleBuilder {
        EnsembleBuilder::new()
    }

    /// Number of registered voices.
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    /// Whether the ensemble has no voices.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Iterates over the members as trait objects, in registration order.
    pub fn voices(&self) -> impl Iterator<Item = &dyn Voice> {
        self.voices.iter().map(|voice| voice.as_ref())
    }

    /// Emits every member's line to `out`, in registration order.
    ///
    /// An empty ensemble writes nothing and succeeds. The first delivery
    /// failure stops the run and is returned.
    pub fn emit_all<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), EmitError> {
        for voice in &self.voices {
            emit(voice.as_ref(), out)?;
        }
        Ok(())
    }
}

/// Builder for constructing an [`Ensemble`].
pub struct EnsembleBuilder {
    voices: Vec<Arc<dyn Voice>>,
}

impl Default for EnsembleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnsembleBuilder {
    /// Create a new empty ensemble builder.
    pub fn new() -> Self {
        Self { voices: Vec::new() }
    }

    /// Register a voice. Members are heard in registration order.
    pub fn register<V: Voice + 'static>(mut self, voice: V) -> Self {
        self.voices.push(Arc::new(voice));
        self
    }

    /// Build the ensemble.
    pub fn build(self) -> Ensemble {
        Ensemble {
            voices: self.voices,
        }
    }
}
