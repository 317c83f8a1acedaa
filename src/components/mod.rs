//! Presentational chrome components driven by the router's current view.

pub mod ad_slot;
pub mod calculator_card;
pub mod consent_banner;
pub mod header;
pub mod history_panel;
pub mod onboarding;
