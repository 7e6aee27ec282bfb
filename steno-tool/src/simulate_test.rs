use steno_common::keycodes::*;

use super::*;

fn keys(sim: &Simulation) -> Vec<Vec<u8>> {
    sim.accepted().map(|s| s.keys.clone()).collect()
}

#[test]
fn types_hi() {
    let sim = simulate("Hi!", &SimOptions::default()).unwrap();

    assert_eq!(
        keys(&sim),
        [
            vec![KEY_SHIFT],
            vec![KEY_SHIFT, KEY_A + 7],
            vec![],
            vec![KEY_A + 8],
            vec![],
            vec![KEY_SHIFT],
            vec![KEY_SHIFT, KEY_1],
            vec![],
        ]
    );
    assert_eq!(sim.submissions.len(), 8);
    assert_eq!(sim.ticks, 8);
    assert_eq!(sim.evicted, 0);
    let times: Vec<u32> = sim.submissions.iter().map(|s| s.at).collect();
    assert_eq!(times, [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn rejected_attempt_is_retried() {
    let opts = SimOptions {
        reject: vec![3],
        ..Default::default()
    };
    let sim = simulate("Hi!", &opts).unwrap();

    assert_eq!(sim.submissions.len(), 9);
    assert_eq!(sim.accepted().count(), 8);
    assert_eq!(sim.submissions[2].keys, sim.submissions[3].keys);
    assert!(!sim.submissions[2].accepted);
    assert_eq!(sim.submissions[2].at, 2);
    // the retry is accepted and the next action is applied in the same tick
    assert_eq!(sim.submissions[3].at, 3);
    assert_eq!(sim.submissions[4].at, 3);
    assert_eq!(sim.submissions[4].keys, [KEY_A + 8]);
}

#[test]
fn long_stall_keeps_order() {
    let opts = SimOptions {
        reject: (3..=60).collect(),
        ..Default::default()
    };
    let sim = simulate("Hi!", &opts).unwrap();

    assert_eq!(sim.accepted().count(), 8);
    assert_eq!(keys(&sim), keys(&simulate("Hi!", &SimOptions::default()).unwrap()));
    let retry = &sim.submissions[60];
    assert_eq!(retry.attempt, 61);
    assert!(retry.accepted);
    assert_eq!(retry.at, 60);
}

#[test]
fn clock_wraps_mid_text() {
    let opts = SimOptions {
        start_ms: u32::MAX - 2,
        tick_ms: 2,
        reject: vec![2, 3],
        ..Default::default()
    };
    let sim = simulate("ab", &opts).unwrap();

    assert_eq!(sim.accepted().count(), 4);
    let times: Vec<u32> = sim.submissions.iter().map(|s| s.at).collect();
    assert_eq!(times, [u32::MAX - 2, u32::MAX, 1, 3, 3, 5]);
}

#[test]
fn gives_up_after_max_ticks() {
    let opts = SimOptions {
        max_ticks: 3,
        ..Default::default()
    };
    let err = simulate("abc", &opts).unwrap_err();
    assert_eq!(err.to_string(), "still 3 actions queued after 3 ticks");

    let opts = SimOptions {
        tick_ms: 0,
        ..Default::default()
    };
    assert!(simulate("a", &opts).is_err());
}

#[test]
fn empty_text() {
    let sim = simulate("", &SimOptions::default()).unwrap();
    assert_eq!(sim.ticks, 0);
    assert!(sim.submissions.is_empty());
}

#[test]
fn display_submission() {
    let s = Submission {
        at: 12,
        attempt: 3,
        keys: vec![KEY_SHIFT, KEY_A + 7],
        accepted: false,
    };
    assert_eq!(s.to_string(), "      12ms #3    rejected [LeftShift H]");
}
