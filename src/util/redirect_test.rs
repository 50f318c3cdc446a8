use super::*;

// =============================================================
// Fragment markers
// =============================================================

#[test]
fn state_marker_qualifies() {
    assert!(fragment_has_auth_markers("#state=abc"));
}

#[test]
fn code_marker_qualifies_among_other_params() {
    assert!(fragment_has_auth_markers("#code=xyz&client_info=eyJ9"));
}

#[test]
fn plain_fragment_does_not_qualify() {
    assert!(!fragment_has_auth_markers("#section-2"));
}

#[test]
fn empty_fragment_does_not_qualify() {
    assert!(!fragment_has_auth_markers(""));
}

#[test]
fn marker_as_substring_of_another_key_does_not_qualify() {
    assert!(!fragment_has_auth_markers("#estate=1&barcode=44"));
}

// =============================================================
// Settling machine
// =============================================================

#[test]
fn qualifying_observation_arms_settling_and_expiry_clears_it() {
    let mut settling = Settling::default();
    let generation = settling.observe(true).unwrap();
    assert!(settling.is_settling());
    settling.expire(generation);
    assert!(!settling.is_settling());
}

#[test]
fn non_qualifying_observation_is_inert() {
    let mut settling = Settling::default();
    assert!(settling.observe(false).is_none());
    assert!(!settling.is_settling());
}

#[test]
fn reobservation_restarts_rather_than_stacks() {
    let mut settling = Settling::default();
    let first = settling.observe(true).unwrap();
    let second = settling.observe(true).unwrap();

    // The superseded timer fires first and must be ignored.
    settling.expire(first);
    assert!(settling.is_settling());

    settling.expire(second);
    assert!(!settling.is_settling());
}

#[test]
fn only_the_armed_timer_clears_settling() {
    // A later non-qualifying location change does not clear the flag; decay
    // comes from the timer alone.
    let mut settling = Settling::default();
    let generation = settling.observe(true).unwrap();
    assert!(settling.observe(false).is_none());
    assert!(settling.is_settling());
    settling.expire(generation);
    assert!(!settling.is_settling());
}
