//! Dispatch through the tagged-variant path.

use menagerie::{Cat, Dog, KnownVoice, Voice, emit};
use menagerie::testing::RecordingSink;

#[test]
fn tagged_dispatch_selects_by_variant() {
    let dog = KnownVoice::from(Dog);
    let cat = KnownVoice::from(Cat);

    assert_eq!(dog.sound(), "Bark");
    assert_eq!(cat.sound(), "Meow");
}

#[test]
fn heterogeneous_line_up_without_trait_objects() {
    let sink = RecordingSink::new();
    let mut writer = sink.clone();

    let line_up = [KnownVoice::Cat(Cat), KnownVoice::Dog(Dog)];
    for voice in &line_up {
        emit(voice, &mut writer).unwrap();
    }

    assert_eq!(sink.lines(), ["Meow", "Bark"]);
}

#[test]
fn tagged_and_dynamic_paths_agree() {
    let tagged = KnownVoice::Dog(Dog);
    let dynamic: &dyn Voice = &Dog;

    assert_eq!(tagged.sound(), dynamic.sound());
}
