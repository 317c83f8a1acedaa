use super::*;

#[test]
fn initial_prefers_snapshot_value() {
    let snap = snapshot(&[("amount", "5000")]);
    assert_eq!(initial(Some(&snap), "amount", ""), "5000");
}

#[test]
fn initial_falls_back_to_default() {
    let snap = snapshot(&[("amount", "5000")]);
    assert_eq!(initial(Some(&snap), "rate", "7.5"), "7.5");
    assert_eq!(initial(None, "rate", "7.5"), "7.5");
}

#[test]
fn initial_ignores_non_string_values() {
    let mut snap = InputSnapshot::new();
    snap.insert("amount".into(), serde_json::json!(42));
    assert_eq!(initial(Some(&snap), "amount", "x"), "x");
}

#[test]
fn parse_number_accepts_trimmed_decimals() {
    assert_eq!(parse_number(" 12.5 "), Some(12.5));
}

#[test]
fn parse_number_rejects_garbage_and_non_finite() {
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
}
