//! Settings schema and built-in defaults.

use serde::Deserialize;

/// Validation settings, all optional in `.cairn.yml`.
///
/// Every field has a built-in default so the tool runs with no
/// configuration at all; a settings file only overrides the fields it
/// names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CairnConfig {
    /// Minimum Node.js major version.
    #[serde(default = "default_node_min_major")]
    pub node_min_major: u32,

    /// Minimum Firebase CLI major version.
    #[serde(default = "default_firebase_min_major")]
    pub firebase_min_major: u32,

    /// Subdirectory whose npm toolchain must be available.
    #[serde(default = "default_functions_dir")]
    pub functions_dir: String,

    /// Files that must exist, relative to the project root.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Script entry that must be present in package.json.
    #[serde(default = "default_build_script")]
    pub build_script: String,

    /// Environment variables expected when running under CI.
    #[serde(default = "default_ci_env_vars")]
    pub ci_env_vars: Vec<String>,
}

impl Default for CairnConfig {
    fn default() -> Self {
        Self {
            node_min_major: default_node_min_major(),
            firebase_min_major: default_firebase_min_major(),
            functions_dir: default_functions_dir(),
            required_files: default_required_files(),
            build_script: default_build_script(),
            ci_env_vars: default_ci_env_vars(),
        }
    }
}

fn default_node_min_major() -> u32 {
    20
}

fn default_firebase_min_major() -> u32 {
    13
}

fn default_functions_dir() -> String {
    "functions".to_string()
}

fn default_required_files() -> Vec<String> {
    [
        "package.json",
        "firebase.json",
        ".firebaserc",
        ".github/workflows/deploy.yml",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_build_script() -> String {
    "build".to_string()
}

fn default_ci_env_vars() -> Vec<String> {
    ["FIREBASE_TOKEN", "FIREBASE_PROJECT_ID", "GCP_SA_KEY"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
