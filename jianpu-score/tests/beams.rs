use itertools::Itertools;
use jianpu_score::dom::{BeamLevel, BeamLevels};

mod common;
use common::voice;

fn spans(groups: &[(u64, u64)]) -> Vec<usize> {
    let v = voice(&groups.iter().map(|(n, d)| (1, *n, *d)).collect_vec());
    (0..groups.len()).map(|i| v.beam_span(i)).collect()
}

#[test]
fn eighth_pair_then_quarters() {
    let groups = [(1, 2), (1, 2), (1, 1), (1, 1), (1, 1)];
    let v = voice(&groups.iter().map(|(n, d)| (5, *n, *d)).collect_vec());
    assert_eq!(v.notes_until_next_quarter(0), Some(2));
    assert_eq!(v.notes_in_same_duration_run(0), 2);
    assert_eq!(v.notes_in_same_duration_run(2), 3);
    let expected = [
        BeamLevels::new(2, 0, 0),
        BeamLevels::new(1, 0, 0),
        BeamLevels::default(),
        BeamLevels::default(),
        BeamLevels::default(),
    ];
    for (got, want) in v.beam_levels().into_iter().zip_eq(expected) {
        assert_eq!(got, want);
    }
}

#[test]
fn plain_quarters() {
    let v = voice(&[(1, 1, 1), (2, 1, 1), (3, 1, 1), (4, 1, 1)]);
    for index in 0..4 {
        assert_eq!(v.notes_until_next_quarter(index), Some(1));
    }
    assert!(!v.beam_levels().iter().any(BeamLevels::is_visible));
}

#[test]
fn beam_stops_at_quarter_boundary() {
    // four eighths: two beams of two, not one of four
    assert_eq!(spans(&[(1, 2), (1, 2), (1, 2), (1, 2)]), vec![2, 1, 2, 1]);
    // unequal durations never share a line
    assert_eq!(spans(&[(3, 4), (1, 4), (1, 1)]), vec![1, 1, 1]);
}

#[test]
fn sixteenths_under_eighth_line() {
    let v = voice(&[(1, 1, 2), (2, 1, 4), (3, 1, 4), (4, 1, 1)]);
    let levels = v.beam_levels();
    assert_eq!(levels[0].get(BeamLevel::Eighth), 1);
    assert_eq!(levels[1], BeamLevels::new(2, 2, 0));
    assert_eq!(levels[2], BeamLevels::new(2, 1, 0));
    assert!(!levels[3].is_visible());
}

#[test]
fn thirty_seconds_raise_every_level() {
    let groups = [(1, 8); 8];
    let v = voice(&groups.iter().map(|(n, d)| (6, *n, *d)).collect_vec());
    let levels = v.beam_levels();
    assert_eq!(levels[0], BeamLevels::new(8, 8, 8));
    assert_eq!(levels[7], BeamLevels::new(8, 8, 1));
    for level in BeamLevel::ALL {
        assert!(levels.iter().all(|l| l.get(level) > 0));
    }
}
