use super::*;

#[test]
fn latch_starts_in_loading() {
    assert!(!LoadLatch::default().is_ready());
}

#[test]
fn incomplete_observations_leave_it_loading() {
    let mut latch = LoadLatch::default();
    assert!(!latch.observe(false));
    assert!(!latch.observe(false));
}

#[test]
fn first_completion_takes_the_transition() {
    let mut latch = LoadLatch::default();
    latch.observe(false);
    assert!(latch.observe(true));
    assert!(latch.is_ready());
}

#[test]
fn later_busy_flips_do_not_revert() {
    let mut latch = LoadLatch::default();
    latch.observe(true);
    // e.g. logout sets the adapter busy again after the initial load.
    assert!(latch.observe(false));
    assert!(latch.is_ready());
}
