// Christoffel Cutlery - Menu Catalog Library
// Exposes the catalog model for the terminal UI, the CLI, and tests

pub mod catalog;
pub mod config;
pub mod entities;
pub mod observability;
pub mod schema;

// Re-export commonly used types
pub use catalog::{CategorySummary, MenuCatalog};
pub use config::{AppConfig, LogConfig, MenuConfig};
pub use entities::{Course, Intensity, IntensityScale, ItemId, MenuItem, ParseCourseError};
pub use observability::{init_logging, LogTarget};
pub use schema::{parse_ingredients, parse_price, ItemCandidate, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
