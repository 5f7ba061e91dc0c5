//! Delivery of sounds to an output stream.
//!
//! [`emit`] is the single invocation point: given any voice and any
//! `io::Write` sink, it delivers the line belonging to the voice's runtime
//! identity. The function is generic, so statically typed voices, trait
//! objects, and [`Binding`]s all go through the same call.
//!
//! [`Binding`]: menagerie_core::Binding

use menagerie_core::{EmitError, Voice};
use std::io::Write;

/// Writes the voice's line, newline-terminated, to `out`.
///
/// Which line is written is decided entirely by the variant bound to
/// `voice` at the time of the call.
pub fn emit<V, W>(voice: &V, out: &mut W) -> Result<(), EmitError>
where
    V: Voice + ?Sized,
    W: Write + ?Sized,
{
    let line = voice.sound();
    #[cfg(feature = "tracing")]
    tracing::debug!(sound = line, "emitting voice");
    writeln!(out, "{line}")?;
    Ok(())
}

/// Writes the voice's line to standard output.
pub fn announce<V: Voice + ?Sized>(voice: &V) -> Result<(), EmitError> {
    let stdout = std::io::stdout();
    emit(voice, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::{announce, emit};
    use crate::voices::{Cat, Dog};
    use menagerie_core::Voice;

    #[test]
    fn emit_appends_one_line_per_call() {
        let mut out = Vec::new();
        emit(&Dog, &mut out).unwrap();
        emit(&Cat, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Bark\nMeow\n");
    }

    #[test]
    fn emit_accepts_trait_objects() {
        let voice: &dyn Voice = &Cat;
        let mut out = Vec::new();
        emit(voice, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Meow\n");
    }

    #[test]
    fn announce_reaches_standard_output() {
        announce(&Dog).unwrap();
    }
}
