//! Client-side NF registration and heartbeat lifecycle coordination for
//! 5G service-based networks.
//!
//! The crate keeps a network function's profile current in the NRF and
//! proves liveness through periodic heartbeats. Callers implement
//! [`RegistryClient`] over their own SBI transport, then feed a
//! [`RegistrationController`] with PLMN scope updates:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use nrf_agent::{RegistrationController, Settings};
//! # async fn example(client: Arc<impl nrf_agent::RegistryClient>) {
//! let settings = Settings::load(None).unwrap();
//! let (plmn_tx, plmn_rx) = tokio::sync::mpsc::channel(16);
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());
//!
//! let controller = RegistrationController::new(client, settings.lifecycle);
//! tokio::spawn(async move { controller.run(plmn_rx, shutdown_rx).await });
//! # let _ = (plmn_tx, shutdown_tx);
//! # }
//! ```
//!
//! An empty scope update deregisters the function; a non-empty one replaces
//! any in-flight registration attempt with a new one.

mod config;
mod errors;
mod registration;
mod registry;

pub use config::*;
pub use errors::*;
pub use registration::*;
pub use registry::*;

//-----------------------------------------------------------
// Test utils
