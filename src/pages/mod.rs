//! Page components, one per [`crate::router::View`] variant.

pub mod blog;
pub mod calculator;
pub mod home;
pub mod policy;
pub mod saved_dates;
