pub mod query_state;
pub mod sidebar;
pub mod unit_filter;

pub use query_state::{InMemoryQueryState, QueryState};
pub use sidebar::{MenuEntry, MenuIcon, sidebar_menu};
pub use unit_filter::{UnitChangeCallback, UnitFilter, UnitFilterConfig};
