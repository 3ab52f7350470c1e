//! Icon Hunter host: configuration, logging setup and the HTTP surface
//! over the `hunter-search` aggregation core.

pub mod config;
pub mod error;
pub mod server;

pub use config::{HunterConfig, ServerConfig};
pub use error::{HunterError, Result};
pub use server::{router, run_server};
