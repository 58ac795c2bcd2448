use jianpu_score::dom::{Group, Note};
use jianpu_score::primitives::Duration;

mod common;
use common::{init_logger, note_at, quarters, score, stave, voice};

#[test]
fn time_axis_is_cyclic() {
    init_logger();
    let score = score(
        1,
        vec![
            stave(vec![quarters(&[1, 2, 3, 4])]),
            stave(vec![quarters(&[5, 6, 7, 8])]),
        ],
    );
    let two = note_at(&score, 0, 0, 1, 0);
    assert_eq!(two.left().get().number, 1);
    assert_eq!(two.right().get().number, 3);
    assert_eq!(two.left().right(), two);
    assert_eq!(two.right().left(), two);

    // over the barline
    let four = note_at(&score, 0, 0, 3, 0);
    assert_eq!(four.right().get().number, 5);
    assert_eq!(four.right().left(), four);

    // past the last measure back to the first
    let eight = note_at(&score, 1, 0, 3, 0);
    let one = eight.right();
    assert_eq!(one, score.first_note());
    assert_eq!(one.left(), eight);
}

#[test]
fn time_axis_keeps_instrument() {
    let score = score(
        2,
        vec![
            stave(vec![quarters(&[1])]),
            stave(vec![quarters(&[2])]),
            stave(vec![quarters(&[3])]),
            stave(vec![quarters(&[4])]),
        ],
    );
    let two = note_at(&score, 1, 0, 0, 0);
    assert_eq!(two.right().get().number, 4);
    assert_eq!(two.left().get().number, 4);
    assert_eq!(two.right().right(), two);
}

#[test]
fn horizontal_moves_land_on_bottom_note() {
    let chord = Group::new(
        Duration::quarter(),
        [Note::new(1, 0), Note::new(3, 0), Note::new(5, 0)],
    );
    let mut v = quarters(&[6]);
    v.add_groups(0, [chord]);
    let score = score(1, vec![stave(vec![v])]);
    let six = note_at(&score, 0, 0, 1, 0);
    assert_eq!(six.left().get().number, 1);
    let top = note_at(&score, 0, 0, 0, 2);
    assert_eq!(top.right(), six);
}

#[test]
fn fewer_voices_in_next_measure_clamp() {
    let score = score(
        1,
        vec![
            stave(vec![quarters(&[1, 2]), quarters(&[3, 4])]),
            stave(vec![quarters(&[5, 6])]),
        ],
    );
    let four = note_at(&score, 0, 1, 1, 0);
    let five = four.right();
    assert_eq!(five.get().number, 5);
    assert_eq!(five.left().get().number, 2);
}

#[test]
fn register_axis_follows_onset() {
    init_logger();
    let score = score(
        2,
        vec![
            stave(vec![
                quarters(&[1, 2, 3, 4]),
                voice(&[(5, 2, 1), (6, 2, 1)]),
            ]),
            stave(vec![voice(&[(7, 4, 1)])]),
        ],
    );
    let two = note_at(&score, 0, 0, 1, 0);
    let three = note_at(&score, 0, 0, 2, 0);
    assert_eq!(two.up().get().number, 5);
    assert_eq!(three.up().get().number, 6);

    // above the top voice of the first stave: clamped to that stave,
    // so register wraps to its bottom voice
    let six = three.up();
    assert_eq!(six.up(), three);

    // below the bottom voice: the next stave's top voice
    let seven = three.down();
    assert_eq!(seven.get().number, 7);
    assert_eq!(seven.path().stave, 1);

    // last stave clamps as well
    assert_eq!(seven.down(), seven);
    assert_eq!(seven.up(), score.first_note());
}

#[test]
fn register_axis_walks_chord_first() {
    let chord = Group::new(
        Duration::new(4, 1),
        [Note::new(1, 0), Note::new(3, 0), Note::new(5, 0)],
    );
    let score =
        score(1, vec![stave(vec![jianpu_score::Voice::with_groups([chord])])]);
    let one = score.first_note();
    let three = one.up();
    let five = three.up();
    assert_eq!(three.get().number, 3);
    assert_eq!(five.get().number, 5);
    assert_eq!(five.down(), three);
    // single stave, single voice: both ends come back into the chord
    assert_eq!(five.up(), one);
    assert_eq!(one.down(), five);
}

#[test]
fn onset_between_group_boundaries() {
    let score = score(
        1,
        vec![stave(vec![
            voice(&[(1, 3, 2), (2, 5, 2)]),
            voice(&[(3, 1, 1), (4, 1, 1), (5, 2, 1)]),
        ])],
    );
    // onset 1 in the upper voice sounds inside the lower voice's first group
    let four = note_at(&score, 0, 1, 1, 0);
    assert_eq!(four.down().get().number, 1);
    // onset 2 sits inside the lower voice's second group
    let five = note_at(&score, 0, 1, 2, 0);
    assert_eq!(five.down().get().number, 2);
    // onset 3/2 lands on the upper voice's group sounding then
    let two = note_at(&score, 0, 0, 1, 0);
    assert_eq!(two.up().get().number, 4);
}

#[test]
fn path_and_parents() {
    let score = score(1, vec![stave(vec![quarters(&[1, 2]), quarters(&[3])])]);
    let three = note_at(&score, 0, 1, 0, 0);
    let path = three.path();
    assert_eq!((path.stave, path.voice, path.group, path.note), (0, 1, 0, 0));
    assert_eq!(three.group().voice().stave().id(), score.staves()[0].id());
    assert_eq!(three.get().group_id(), Some(three.group().id()));
    assert_eq!(three.voice().total_duration(), Duration::new(4, 1));
}
