//! Testing utilities for Menagerie.
//!
//! This module provides utilities to make testing voices and delivery
//! easier.
//!
//! # Features
//!
//! - [`RecordingSink`]: a sink that captures everything written to it
//! - [`FailingSink`]: a sink that refuses every write
//! - [`CountingVoice`]: a voice that counts how often it is asked to sound

use menagerie_core::Voice;
use std::{
    io::{self, Write},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that captures everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to the code
/// under test and read the capture through another.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let mut writer = sink.clone();
///
/// emit(&Dog, &mut writer)?;
///
/// assert_eq!(sink.contents(), "Bark\n");
/// ```
pub struct RecordingSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl RecordingSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self {
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Everything written so far, split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Clear the capture.
    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingSink {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl Write for RecordingSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Failing Sink
// ============================================================================

/// A sink that refuses every write.
///
/// Useful for verifying that delivery failures surface as errors instead of
/// being swallowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Counting Voice
// ============================================================================

/// A voice with a line fixed at construction that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let voice = CountingVoice::new("Moo");
/// let observer = voice.clone();
///
/// emit(&voice, &mut sink)?;
///
/// assert_eq!(observer.count(), 1);
/// ```
pub struct CountingVoice {
    line: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CountingVoice {
    /// Create a counting voice with the given fixed line.
    pub fn new(line: &'static str) -> Self {
        Self {
            line,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times this voice has been asked to sound.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingVoice {
    fn clone(&self) -> Self {
        Self {
            line: self.line,
            calls: self.calls.clone(),
        }
    }
}

impl Voice for CountingVoice {
    fn sound(&self) -> &'static str {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::{CountingVoice, RecordingSink};
    use crate::emit::emit;

    #[test]
    fn recording_sink_shares_its_capture_across_clones() {
        let sink = RecordingSink::new();
        let voice = CountingVoice::new("Moo");

        emit(&voice, &mut sink.clone()).unwrap();

        assert_eq!(sink.contents(), "Moo\n");
        assert_eq!(sink.lines(), ["Moo"]);
        assert_eq!(voice.count(), 1);

        sink.clear();
        voice.reset();
        assert!(sink.contents().is_empty());
        assert_eq!(voice.count(), 0);
    }
}
