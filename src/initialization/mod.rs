//! Application initialization and resource setup.
//!
//! Provides the logger and the shared HTTP client. Both return proper error
//! types; everything downstream assumes they succeeded.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
