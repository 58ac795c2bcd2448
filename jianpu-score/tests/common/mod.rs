#![allow(dead_code)]

use jianpu_score::{
    dom::{Group, Note, NotePath, NoteRef, Score, Stave, Voice},
    primitives::{Duration, TimeSignature},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Voice of single-note groups: `(number, numerator, denominator)`.
pub fn voice(groups: &[(u8, u64, u64)]) -> Voice {
    Voice::with_groups(groups.iter().map(|(number, n, d)| {
        Group::new(Duration::new(*n, *d), [Note::new(*number, 0)])
    }))
}

/// Voice of quarter notes.
pub fn quarters(numbers: &[u8]) -> Voice {
    Voice::with_groups(numbers.iter().map(|number| {
        Group::new(Duration::quarter(), [Note::new(*number, 0)])
    }))
}

pub fn stave(voices: Vec<Voice>) -> Stave {
    Stave::with_voices(Duration::new(4, 1), voices)
}

pub fn score(instruments: usize, staves: Vec<Stave>) -> Score {
    Score::with_staves(
        (0..instruments).map(|i| format!("instrument {}", i)).collect(),
        TimeSignature::new(4, 4),
        staves,
    )
    .expect("valid test score")
}

pub fn note_at(
    score: &Score,
    stave: usize,
    voice: usize,
    group: usize,
    note: usize,
) -> NoteRef<'_> {
    score
        .note_at(NotePath::new(stave, voice, group, note))
        .expect("note exists")
}

/// Numbers of every chord in a voice.
pub fn numbers(voice: &Voice) -> Vec<Vec<u8>> {
    voice
        .groups()
        .iter()
        .map(|g| g.notes().iter().map(|n| n.number).collect())
        .collect()
}

/// Every level non-empty, every back-reference pointing at its owner.
pub fn assert_well_formed(score: &Score) {
    assert!(!score.staves().is_empty());
    assert_eq!(score.staves().len() % score.num_instruments(), 0);
    for stave in score.staves() {
        assert_eq!(stave.score_id(), Some(score.id()));
        assert!(!stave.voices().is_empty());
        for voice in stave.voices() {
            assert_eq!(voice.stave_id(), Some(stave.id()));
            assert!(!voice.groups().is_empty());
            for group in voice.groups() {
                assert_eq!(group.voice_id(), Some(voice.id()));
                assert!(!group.notes().is_empty());
                for note in group.notes() {
                    assert_eq!(note.group_id(), Some(group.id()));
                }
            }
        }
    }
}
