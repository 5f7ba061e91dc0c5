//! Dispatch through trait objects.
//!
//! The reference's declared type is `dyn Voice` everywhere here; the line
//! produced must always belong to the runtime-bound variant.

use menagerie::{Cat, Dog, Voice, emit};
use menagerie::testing::RecordingSink;
use std::sync::Arc;

// A variant defined outside the standard set, to show the abstraction is
// open to downstream implementors.
struct Cow;

impl Voice for Cow {
    fn sound(&self) -> &'static str {
        "Moo"
    }
}

#[test]
fn reference_dispatches_to_runtime_variant() {
    let dog: &dyn Voice = &Dog;
    let cat: &dyn Voice = &Cat;

    assert_eq!(dog.sound(), "Bark");
    assert_eq!(cat.sound(), "Meow");
}

#[test]
fn boxed_and_shared_references_agree_with_concrete_calls() {
    let boxed: Box<dyn Voice> = Box::new(Dog);
    let shared: Arc<dyn Voice> = Arc::new(Cat);

    assert_eq!(boxed.sound(), Dog.sound());
    assert_eq!(shared.sound(), Cat.sound());
}

#[test]
fn emit_writes_the_bound_variant_line() {
    let sink = RecordingSink::new();
    let mut writer = sink.clone();

    let voices: Vec<Box<dyn Voice>> = vec![Box::new(Dog), Box::new(Cat), Box::new(Cow)];
    for voice in &voices {
        emit(voice, &mut writer).unwrap();
    }

    assert_eq!(sink.lines(), ["Bark", "Meow", "Moo"]);
}

#[test]
fn downstream_variants_dispatch_like_standard_ones() {
    let cow: &dyn Voice = &Cow;
    assert_eq!(cow.sound(), "Moo");
}

fn line_of<V: Voice>(voice: V) -> &'static str {
    voice.sound()
}

#[test]
fn references_satisfy_the_voice_bound_themselves() {
    assert_eq!(line_of(&Dog), "Bark");
    assert_eq!(line_of(Box::new(Cat)), "Meow");
}
