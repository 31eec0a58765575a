use super::*;

#[test]
fn nothing_pending_initially() {
    let mut d: Debouncer<u32> = Debouncer::new(100.0);
    assert!(!d.is_pending());
    assert_eq!(d.poll(1_000.0), None);
}

#[test]
fn value_released_after_quiet_window() {
    let mut d = Debouncer::new(100.0);
    d.push(0.0, "a");
    assert_eq!(d.poll(99.0), None);
    assert_eq!(d.poll(100.0), Some("a"));
    assert!(!d.is_pending());
    assert_eq!(d.poll(500.0), None);
}

#[test]
fn burst_collapses_to_latest_value() {
    let mut d = Debouncer::new(100.0);
    d.push(0.0, 1);
    d.push(40.0, 2);
    d.push(80.0, 3);
    assert_eq!(d.poll(150.0), None);
    assert_eq!(d.deadline(), Some(180.0));
    assert_eq!(d.poll(180.0), Some(3));
}

#[test]
fn cancel_discards_pending_value() {
    let mut d = Debouncer::new(50.0);
    d.push(0.0, 'x');
    assert_eq!(d.cancel(), Some('x'));
    assert_eq!(d.poll(100.0), None);
}

#[test]
fn negative_window_clamps_to_zero() {
    let mut d = Debouncer::new(-10.0);
    d.push(5.0, ());
    assert_eq!(d.poll(5.0), Some(()));
}
