//! Settings file discovery and loading.

use std::fs;
use std::path::Path;

use crate::config::schema::CairnConfig;
use crate::error::{CairnError, Result};

/// Settings file name, looked up at the project root.
pub const SETTINGS_FILE: &str = ".cairn.yml";

/// Load settings for the given project root.
///
/// A missing file yields built-in defaults. An unreadable or invalid file
/// is an error rather than a silent fallback, so a typo never loosens
/// validation.
pub fn load_config(project_root: &Path) -> Result<CairnConfig> {
    let path = project_root.join(SETTINGS_FILE);
    if !path.exists() {
        tracing::debug!("no {} found, using built-in defaults", SETTINGS_FILE);
        return Ok(CairnConfig::default());
    }

    let raw = fs::read_to_string(&path)?;
    serde_yaml::from_str(&raw).map_err(|e| CairnError::ConfigParseError {
        path,
        message: e.to_string(),
    })
}
