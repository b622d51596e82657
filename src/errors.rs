//! Error hierarchy for the NF registration subsystem.
//!
//! Registry-call failures are handled locally by the lifecycle coordinator
//! (retried, logged, or tolerated); the types here exist so that callers and
//! [`RegistryClient`](crate::RegistryClient) implementations share one
//! failure taxonomy.

use config::ConfigError;

use crate::ProblemDetails;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

/// Aggregate error for embedding applications.
///
/// Produced by [`Settings::load`](crate::Settings::load); the `Registry`
/// variant is the caller-side aggregation for surfacing
/// [`RegistryError`]s from their own client code:
///
/// ```
/// use nrf_agent::Error;
/// use nrf_agent::RegistryError;
///
/// fn surface(outcome: Result<(), RegistryError>) -> nrf_agent::Result<()> {
///     Ok(outcome?)
/// }
///
/// let err = surface(Err(RegistryError::Transport("connection refused".into())))
///     .unwrap_err();
/// assert!(matches!(err, Error::Registry(RegistryError::Transport(_))));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry (NRF) interaction failures
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Failure of a single registry operation.
///
/// Both variants are re-registration triggers in the heartbeat path: a
/// structured rejection means the NRF no longer recognizes the instance, a
/// transport failure means it could not be asked.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry produced a structured rejection
    #[error("registry rejected the request: {0}")]
    Problem(ProblemDetails),

    /// The call failed to produce a structured response
    #[error("registry transport failure: {0}")]
    Transport(String),
}
