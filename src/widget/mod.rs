//! Search widget: options, controller, events and mount lifecycle

mod events;
mod mount;
mod options;
mod session;

pub use events::{SearchEvent, SearchView};
pub use mount::MountedSearch;
pub use options::{
    DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SEARCH_LENGTH, DisplayMode, SearchOptions,
};
pub use session::{SmartSearch, SmartSearchBuilder};
