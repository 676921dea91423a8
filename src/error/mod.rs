//! Error types and handling for Shipwright
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Shipwright operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShipwrightError {
    // Catalog errors
    #[error("Template '{id}' not found in {kind} catalog")]
    #[diagnostic(
        code(shipwright::catalog::not_found),
        help("Run 'shipwright list' to see available templates")
    )]
    TemplateNotFound { kind: String, id: String },

    #[error("Failed to fetch {what} from catalog: {reason}")]
    #[diagnostic(
        code(shipwright::catalog::fetch_failed),
        help("Check that the catalog is reachable and the template name is correct")
    )]
    FetchFailed { what: String, reason: String },

    // Project errors
    #[error("Project configuration not found: {path}")]
    #[diagnostic(
        code(shipwright::project::config_not_found),
        help("Create a shipwright.yml with a 'compose_dir' entry at the project root")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(shipwright::project::config_parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Compose directory is not configured for this project")]
    #[diagnostic(
        code(shipwright::project::missing_directory),
        help("Set 'compose_dir' in shipwright.yml")
    )]
    ComposeDirMissing,

    #[error("Template '{id}' is not installed in this project")]
    #[diagnostic(
        code(shipwright::project::not_installed),
        help("Run 'shipwright add <id>' first")
    )]
    NotInstalled { id: String },

    // Version resolution errors
    #[error("Cannot resolve a version for '{id}' (available: {available})")]
    #[diagnostic(
        code(shipwright::resolve::unresolved_version),
        help("Pass --version with one of the available versions")
    )]
    UnresolvedVersion { id: String, available: String },

    // Merge errors
    #[error("docker-compose.yml not found: {path}")]
    #[diagnostic(
        code(shipwright::merge::aggregate_missing),
        help("Add at least one template before removing one")
    )]
    AggregateMissing { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(shipwright::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(shipwright::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shipwright::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ShipwrightError {
    fn from(err: std::io::Error) -> Self {
        ShipwrightError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShipwrightError {
    fn from(err: serde_yaml::Error) -> Self {
        ShipwrightError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShipwrightError {
    fn from(err: serde_json::Error) -> Self {
        ShipwrightError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ShipwrightError {
    fn from(err: inquire::InquireError) -> Self {
        ShipwrightError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ShipwrightError {
    fn from(err: reqwest::Error) -> Self {
        ShipwrightError::FetchFailed {
            what: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "catalog".to_string()),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShipwrightError>;
