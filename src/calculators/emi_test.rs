use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn standard_loan() {
    // 100k at 12% over 12 months: the textbook 8884.88/mo case.
    let b = monthly_payment(100_000.0, 12.0, 12.0).unwrap();
    assert!(approx(b.emi, 8884.88, 0.01), "emi was {}", b.emi);
    assert!(approx(b.total_payment, 106_618.55, 0.5));
    assert!(approx(b.total_interest, 6618.55, 0.5));
}

#[test]
fn zero_rate_is_straight_division() {
    let b = monthly_payment(1200.0, 0.0, 12.0).unwrap();
    assert!(approx(b.emi, 100.0, 1e-9));
    assert!(approx(b.total_interest, 0.0, 1e-9));
}

#[test]
fn rejects_non_positive_principal() {
    assert!(monthly_payment(0.0, 10.0, 12.0).is_none());
    assert!(monthly_payment(-5.0, 10.0, 12.0).is_none());
}

#[test]
fn rejects_negative_rate_and_short_tenure() {
    assert!(monthly_payment(1000.0, -1.0, 12.0).is_none());
    assert!(monthly_payment(1000.0, 10.0, 0.0).is_none());
}

#[test]
fn fractional_tenure_rounds_to_whole_months() {
    let exact = monthly_payment(1000.0, 10.0, 12.0).unwrap();
    let rounded = monthly_payment(1000.0, 10.0, 12.4).unwrap();
    assert!(approx(exact.emi, rounded.emi, 1e-9));
}
