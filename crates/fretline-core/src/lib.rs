//! Fretline Core — relay configuration and the shared error taxonomy.

pub mod config;
pub mod error;

pub use config::{ProviderSettings, RelayConfig};
pub use error::{Error, Result};
