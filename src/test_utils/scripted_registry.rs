use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use tokio::time::Instant;

use super::profile_with_heartbeat;
use crate::NfProfile;
use crate::PatchItem;
use crate::PlmnId;
use crate::RegistryClient;
use crate::RegistryError;

/// A registry call observed by [`ScriptedRegistry`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub op: &'static str,
    pub plmn_list: Option<Vec<PlmnId>>,
    pub at: Instant,
}

/// Registry stub with scripted outcomes.
///
/// Every call is recorded with the (test-time) instant it started. Outcome
/// queues are consumed front to back; an exhausted queue yields a successful
/// default so long-running timer tests do not need exhaustive scripts.
/// Optional gates block register/update calls until the test releases a
/// permit, which is how the serialization and supersession races are
/// orchestrated deterministically.
pub struct ScriptedRegistry {
    calls: Mutex<Vec<RecordedCall>>,
    register_outcomes: Mutex<VecDeque<Result<NfProfile, RegistryError>>>,
    update_outcomes: Mutex<VecDeque<Result<NfProfile, RegistryError>>>,
    deregister_outcomes: Mutex<VecDeque<Result<(), RegistryError>>>,
    register_gate: Mutex<Option<Arc<Semaphore>>>,
    update_gate: Mutex<Option<Arc<Semaphore>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedRegistry {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            register_outcomes: Mutex::new(VecDeque::new()),
            update_outcomes: Mutex::new(VecDeque::new()),
            deregister_outcomes: Mutex::new(VecDeque::new()),
            register_gate: Mutex::new(None),
            update_gate: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn push_register(
        &self,
        outcome: Result<NfProfile, RegistryError>,
    ) {
        self.register_outcomes.lock().push_back(outcome);
    }

    pub fn push_update(
        &self,
        outcome: Result<NfProfile, RegistryError>,
    ) {
        self.update_outcomes.lock().push_back(outcome);
    }

    pub fn push_deregister(
        &self,
        outcome: Result<(), RegistryError>,
    ) {
        self.deregister_outcomes.lock().push_back(outcome);
    }

    /// Block register calls until the test adds permits to `gate`.
    pub fn set_register_gate(
        &self,
        gate: Arc<Semaphore>,
    ) {
        *self.register_gate.lock() = Some(gate);
    }

    /// Block update calls until the test adds permits to `gate`.
    pub fn set_update_gate(
        &self,
        gate: Arc<Semaphore>,
    ) {
        *self.update_gate.lock() = Some(gate);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Operation names in call order.
    pub fn ops(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(|call| call.op).collect()
    }

    /// Highest number of registry calls ever executing concurrently.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(
        &self,
        op: &'static str,
        plmn_list: Option<Vec<PlmnId>>,
    ) {
        self.calls.lock().push(RecordedCall {
            op,
            plmn_list,
            at: Instant::now(),
        });
    }

    fn enter(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    async fn wait_for(gate: Option<Arc<Semaphore>>) {
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate semaphore closed").forget();
        }
    }
}

impl Default for ScriptedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryClient for ScriptedRegistry {
    async fn register(
        &self,
        plmn_list: Vec<PlmnId>,
    ) -> Result<NfProfile, RegistryError> {
        self.enter();
        self.record("register", Some(plmn_list));
        let gate = self.register_gate.lock().clone();
        Self::wait_for(gate).await;
        let outcome = self
            .register_outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(profile_with_heartbeat(Some(60))));
        self.leave();
        outcome
    }

    async fn update(
        &self,
        _patch: Vec<PatchItem>,
    ) -> Result<NfProfile, RegistryError> {
        self.enter();
        self.record("update", None);
        let gate = self.update_gate.lock().clone();
        Self::wait_for(gate).await;
        let outcome = self
            .update_outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(profile_with_heartbeat(Some(60))));
        self.leave();
        outcome
    }

    async fn deregister(&self) -> Result<(), RegistryError> {
        self.enter();
        self.record("deregister", None);
        let outcome = self.deregister_outcomes.lock().pop_front().unwrap_or(Ok(()));
        self.leave();
        outcome
    }
}
