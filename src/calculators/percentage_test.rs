use super::*;

#[test]
fn percent_of_basics() {
    assert!((percent_of(25.0, 200.0) - 50.0).abs() < 1e-9);
    assert!((percent_of(0.0, 200.0)).abs() < 1e-9);
    assert!((percent_of(150.0, 40.0) - 60.0).abs() < 1e-9);
}

#[test]
fn percent_share_basics() {
    assert!((percent_share(50.0, 200.0).unwrap() - 25.0).abs() < 1e-9);
    assert!((percent_share(200.0, 50.0).unwrap() - 400.0).abs() < 1e-9);
}

#[test]
fn percent_share_of_zero_whole_is_undefined() {
    assert!(percent_share(10.0, 0.0).is_none());
}
