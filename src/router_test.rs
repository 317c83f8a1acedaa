use super::*;
use crate::registry::CALCULATORS;

fn fresh() -> RouterState {
    RouterState { path: "/".to_owned(), view: resolve("/"), embed: false }
}

// --- resolve ---

#[test]
fn every_known_calculator_resolves_by_slug() {
    for info in CALCULATORS {
        let path = format!("/calc/{}", slugify(info.name));
        assert_eq!(resolve(&path), View::Calculator { name: info.name.to_owned() }, "{path}");
    }
}

#[test]
fn unknown_calculator_slug_falls_back_to_home() {
    assert_eq!(resolve("/calc/does-not-exist"), View::Home);
    assert_eq!(resolve("/calc/"), View::Home);
}

#[test]
fn blog_routes() {
    assert_eq!(resolve("/blog"), View::BlogList);
    assert_eq!(
        resolve("/blog/understanding-emi"),
        View::BlogPost { slug: "understanding-emi".to_owned() }
    );
    // Unknown post slugs land on the list, not Home.
    assert_eq!(resolve("/blog/never-written"), View::BlogList);
}

#[test]
fn fixed_pages() {
    assert_eq!(resolve("/saved-dates"), View::SavedDates);
    assert_eq!(resolve("/privacy"), View::Policy { key: PolicyKey::Privacy });
    assert_eq!(resolve("/terms"), View::Policy { key: PolicyKey::Terms });
    assert_eq!(resolve("/about"), View::Policy { key: PolicyKey::About });
    assert_eq!(resolve("/disclaimer"), View::Policy { key: PolicyKey::Disclaimer });
}

#[test]
fn resolve_is_total_over_arbitrary_strings() {
    for path in ["", "/", "/nope", "no-leading-slash", "/calc", "/saved-dates/", "///", "/PRIVACY", "\u{0}weird"] {
        assert_eq!(resolve(path), View::Home, "{path:?}");
    }
}

// --- navigate / pop ---

#[test]
fn navigate_pushes_on_path_change() {
    let mut state = fresh();
    let op = state.navigate("/blog", false);
    assert_eq!(op, HistoryOp::Push("/blog".to_owned()));
    assert_eq!(state.view, View::BlogList);
}

#[test]
fn repeat_navigation_to_same_path_does_not_push() {
    let mut state = fresh();
    assert_eq!(state.navigate("/blog", false), HistoryOp::Push("/blog".to_owned()));
    // Second tap on the same link: view re-applies, stack untouched.
    assert_eq!(state.navigate("/blog", false), HistoryOp::None);
    assert_eq!(state.view, View::BlogList);
}

#[test]
fn navigate_replace_replaces() {
    let mut state = fresh();
    assert_eq!(state.navigate("/terms", true), HistoryOp::Replace("/terms".to_owned()));
}

#[test]
fn pop_never_mutates_history() {
    // pop() returns nothing to apply, so a popstate cannot push and loop.
    let mut state = fresh();
    state.navigate("/blog", false);
    state.pop("/");
    assert_eq!(state.view, View::Home);
    assert_eq!(state.path, "/");
}

#[test]
fn unknown_path_navigation_degrades_to_home() {
    let mut state = fresh();
    state.navigate("/calc/bmi-calculator-pro-max", false);
    assert_eq!(state.view, View::Home);
}

// --- startup reconciliation ---

#[test]
fn startup_plain_path() {
    let (state, op) = startup("/saved-dates", "", "");
    assert_eq!(state.view, View::SavedDates);
    assert!(!state.embed);
    assert_eq!(op, HistoryOp::None);
}

#[test]
fn startup_embed_mode_pins_calculator() {
    let (state, op) = startup("/", "?embed=EMI%20Calculator", "");
    assert_eq!(state.view, View::Calculator { name: "EMI Calculator".to_owned() });
    assert!(state.embed);
    assert_eq!(op, HistoryOp::None);
}

#[test]
fn startup_embed_plus_decoding() {
    let (state, _) = startup("/", "?embed=EMI+Calculator", "");
    assert!(state.embed);
}

#[test]
fn startup_unknown_embed_name_is_ignored() {
    let (state, _) = startup("/blog", "?embed=Quantum%20Calculator", "");
    assert!(!state.embed);
    assert_eq!(state.view, View::BlogList);
}

#[test]
fn startup_embed_takes_priority_over_hash() {
    let (state, op) = startup("/", "?embed=BMI%20Calculator", "#/blog");
    assert!(state.embed);
    assert_eq!(op, HistoryOp::None);
}

#[test]
fn startup_legacy_hash_is_normalized_and_replaced() {
    let (state, op) = startup("/", "", "#/blog");
    assert_eq!(state.view, View::BlogList);
    assert_eq!(op, HistoryOp::Replace("/blog".to_owned()));

    let (state, op) = startup("/", "", "#saved-dates");
    assert_eq!(state.view, View::SavedDates);
    assert_eq!(op, HistoryOp::Replace("/saved-dates".to_owned()));
}

#[test]
fn startup_empty_hash_is_not_legacy() {
    let (state, op) = startup("/", "", "#");
    assert_eq!(state.view, View::Home);
    assert_eq!(op, HistoryOp::None);
}

// --- helpers ---

#[test]
fn embed_param_extraction() {
    assert_eq!(embed_param("?a=1&embed=BMI%20Calculator&b=2"), Some("BMI Calculator".to_owned()));
    assert_eq!(embed_param("embed=x"), Some("x".to_owned()));
    assert_eq!(embed_param("?embed="), None);
    assert_eq!(embed_param("?other=1"), None);
    assert_eq!(embed_param(""), None);
}

#[test]
fn percent_decode_handles_escapes_and_malformed_input() {
    assert_eq!(percent_decode("A%20B"), "A B");
    assert_eq!(percent_decode("a+b"), "a b");
    // Malformed escapes pass through instead of erroring.
    assert_eq!(percent_decode("100%"), "100%");
    assert_eq!(percent_decode("%zz"), "%zz");
    assert_eq!(percent_decode("%4"), "%4");
}
