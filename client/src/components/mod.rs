//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers. Network calls
//! stay in pages; components report user intent through callbacks.

pub mod chat_panel;
pub mod dataset_panel;
pub mod series_chart;
pub mod stat_cards;
pub mod time_range_filter;
pub mod toolbar;
