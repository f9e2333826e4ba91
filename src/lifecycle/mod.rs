//! Process lifecycle.
//!
//! The server runs until [`shutdown_signal`] resolves, then drains in-flight
//! requests through axum's graceful shutdown.

mod shutdown;

pub use shutdown::shutdown_signal;
