//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`history`, `saved_dates`, `session`, `ui`) so
//! individual components can depend on small focused models. The history log
//! and saved-date registry are created once in `App` and provided via
//! context; every mutation goes through their methods, which write through
//! to storage, so in-memory and persisted state cannot diverge.

pub mod history;
pub mod saved_dates;
pub mod session;
pub mod ui;
