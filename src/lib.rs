// Library exports for testing and reuse
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use debounce::Debouncer;
pub use error::{Error, Result};
