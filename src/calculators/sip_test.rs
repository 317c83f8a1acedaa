use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn one_year_at_twelve_percent() {
    // 1000/mo at 1%/mo, annuity-due: 12809.33.
    let o = future_value(1000.0, 12.0, 12.0).unwrap();
    assert!(approx(o.future_value, 12_809.33, 0.01), "fv was {}", o.future_value);
    assert!(approx(o.invested, 12_000.0, 1e-9));
    assert!(approx(o.gain, 809.33, 0.01));
}

#[test]
fn zero_rate_returns_contributions() {
    let o = future_value(500.0, 0.0, 24.0).unwrap();
    assert!(approx(o.future_value, 12_000.0, 1e-9));
    assert!(approx(o.gain, 0.0, 1e-9));
}

#[test]
fn rejects_invalid_inputs() {
    assert!(future_value(0.0, 10.0, 12.0).is_none());
    assert!(future_value(100.0, -2.0, 12.0).is_none());
    assert!(future_value(100.0, 10.0, 0.5).is_none());
}
