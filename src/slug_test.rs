use super::*;

#[test]
fn lowercases_and_hyphenates() {
    assert_eq!(slugify("EMI Calculator"), "emi-calculator");
}

#[test]
fn collapses_runs_of_separators() {
    assert_eq!(slugify("Simple  --  Interest"), "simple-interest");
}

#[test]
fn strips_leading_and_trailing_separators() {
    assert_eq!(slugify("  BMI Calculator!  "), "bmi-calculator");
    assert_eq!(slugify("---x---"), "x");
}

#[test]
fn empty_and_all_separator_inputs_yield_empty() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!! ???"), "");
}

#[test]
fn idempotent() {
    for name in ["EMI Calculator", "Age & Date", "a--b", "", "Mom's Day"] {
        let once = slugify(name);
        assert_eq!(slugify(&once), once);
    }
}

#[test]
fn non_ascii_treated_as_separator() {
    assert_eq!(slugify("caf\u{e9} counter"), "caf-counter");
}
