//! Engine configuration.
//!
//! The configuration carries the night premium window and the named export
//! templates. It is loaded once from YAML and treated as immutable for the
//! lifetime of the process.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PremiumWindow, TemplateConfig};
