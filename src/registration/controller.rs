//! Top-level coordinator consuming PLMN scope updates.
//!
//! One controller instance runs for the lifetime of the process. Each scope
//! update cancels the current registration cycle before acting: an empty
//! scope deregisters the function, a non-empty one spawns a fresh
//! registration attempt under a new cancellation token.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::attempt::register_until_success;
use super::heartbeat::HeartbeatScheduler;
use crate::LifecycleConfig;
use crate::PlmnId;
use crate::RegistryClient;

pub struct RegistrationController<C>
where C: RegistryClient
{
    client: Arc<C>,
    scheduler: Arc<HeartbeatScheduler<C>>,
    attempt_lock: Arc<Mutex<()>>,
    config: LifecycleConfig,
}

impl<C> RegistrationController<C>
where C: RegistryClient
{
    pub fn new(
        client: Arc<C>,
        config: LifecycleConfig,
    ) -> Self {
        let scheduler = Arc::new(HeartbeatScheduler::new(
            Arc::clone(&client),
            config.default_heartbeat(),
        ));
        Self {
            client,
            scheduler,
            attempt_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    /// The heartbeat scheduler owned by this controller.
    pub fn scheduler(&self) -> &Arc<HeartbeatScheduler<C>> {
        &self.scheduler
    }

    /// Consume scope updates until shutdown. Updates are processed in
    /// arrival order; at most one non-cancelled registration cycle exists at
    /// any instant.
    pub async fn run(
        &self,
        mut plmn_rx: mpsc::Receiver<Vec<PlmnId>>,
        mut shutdown: watch::Receiver<()>,
    ) {
        info!("started NF registration service");
        let mut current: Option<CancellationToken> = None;
        loop {
            tokio::select! {
                // P0: shutdown received
                _ = shutdown.changed() => {
                    if let Some(token) = current.take() {
                        token.cancel();
                    }
                    info!("NF registration service shutting down");
                    return;
                }

                update = plmn_rx.recv() => {
                    let Some(plmn_list) = update else {
                        if let Some(token) = current.take() {
                            token.cancel();
                        }
                        info!("PLMN config stream closed, NF registration service shutting down");
                        return;
                    };

                    // Cancel the current registration cycle if one is running
                    if let Some(token) = current.take() {
                        info!("registration cycle cancelled");
                        token.cancel();
                    }

                    if plmn_list.is_empty() {
                        debug!("PLMN config is empty, NF will deregister");
                        self.deregister().await;
                    } else {
                        debug!("PLMN config is not empty, NF will update registration");
                        let token = CancellationToken::new();
                        current = Some(token.clone());
                        tokio::spawn(register_until_success(
                            Arc::clone(&self.client),
                            Arc::clone(&self.scheduler),
                            Arc::clone(&self.attempt_lock),
                            self.config,
                            plmn_list,
                            token,
                        ));
                    }
                }
            }
        }
    }

    /// Disarm the heartbeat timer and remove the registration. Best-effort:
    /// a failed deregister is logged and dropped, since the registration may
    /// already be gone from the registry's point of view.
    ///
    /// Takes the attempt lock first: a superseded attempt that is already
    /// past its cancellation check finishes before the timer is disarmed,
    /// so nothing it armed survives the deregistration.
    pub async fn deregister(&self) {
        let _guard = self.attempt_lock.lock().await;
        self.scheduler.stop();
        match self.client.deregister().await {
            Ok(()) => info!("deregistered NF instance from the registry"),
            Err(err) => warn!("deregister NF instance error: {err}"),
        }
    }
}
