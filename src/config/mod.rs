//! Settings loading and defaults.

pub mod loader;
pub mod schema;

pub use loader::{load_config, SETTINGS_FILE};
pub use schema::CairnConfig;
