//! Configuration management
//!
//! Handles the viewer endpoint and lookup settings.

pub mod endpoint;
pub mod settings;

pub use endpoint::ViewerEndpoint;
pub use settings::{Settings, load_settings, load_settings_from};
