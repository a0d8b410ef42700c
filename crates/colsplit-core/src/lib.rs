// ABOUTME: Shared types and configuration for colsplit.
// ABOUTME: Defines display options, config file handling, and session width state.

pub mod config;
pub mod display;
pub mod session;

pub use config::{ColumnsConfig, ConfigError};
pub use display::{DisplayOptions, Gap, VerticalAlignment};
pub use session::{SessionStore, WidthStore};
