//! Time-range selection model and picker state machine for dashboard filters.
//!
//! This crate has no browser or network dependencies. It owns what the
//! dashboard filter control means (which window of time is active, and which
//! popover sub-view is showing) and leaves rendering to the host UI. Hosts
//! read the committed [`selection::Selection`] and translate it into backend
//! query parameters with [`window`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`selection`] | Selection variants, validation, and the committing [`selection::SelectionModel`] |
//! | [`picker`] | Popover navigation state machine with draft inputs |
//! | [`deferred`] | Ticketed, cancellable delayed transition |
//! | [`locale`] | Injected label tables (English, French, or JSON-loaded) |
//! | [`window`] | Selection to half-open date window and stats query |
//! | [`clock`] | "Today" source, fixed in tests |

pub mod clock;
pub mod deferred;
pub mod locale;
pub mod picker;
pub mod selection;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use locale::Locale;
pub use picker::{MenuLayout, PickerAction, PickerConfig, PickerView, TimeRangePicker};
pub use selection::{AutoRange, CustomRange, Preset, QuickKey, Selection, SelectionError, SelectionModel};
pub use window::{DateWindow, StatsQuery};
