//! Abstraction over the Nnrf_NFManagement operations the lifecycle
//! coordinator consumes.
//!
//! Wire-format construction and transport belong to the implementor; the
//! coordinator only cares about the three operations below and their
//! [`RegistryError`] outcomes.

#[cfg(test)]
use mockall::automock;
#[cfg(test)]
use mockall::predicate::*;
use async_trait::async_trait;

use crate::NfProfile;
use crate::PatchItem;
use crate::PlmnId;
use crate::RegistryError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistryClient: Send + Sync + 'static {
    /// Register the NF instance for the given PLMN scope. A successful
    /// response carries the profile the registry stored, including the
    /// heartbeat cadence it expects.
    async fn register(
        &self,
        plmn_list: Vec<PlmnId>,
    ) -> Result<NfProfile, RegistryError>;

    /// Patch the existing registration (NFUpdate). Used by heartbeats to
    /// refresh the instance's REGISTERED status.
    async fn update(
        &self,
        patch: Vec<PatchItem>,
    ) -> Result<NfProfile, RegistryError>;

    /// Remove the registration. Best-effort from the coordinator's point of
    /// view.
    async fn deregister(&self) -> Result<(), RegistryError>;
}
