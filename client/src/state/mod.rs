//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `datasets`, `analytics`, `chat`, `ui`)
//! so individual components can depend on small focused models. Each model is
//! a plain struct wrapped in an `RwSignal` and provided via context by `App`.

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod datasets;
pub mod fence;
pub mod ui;
