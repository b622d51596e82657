//! One registration supervision cycle: retry until success or cancellation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing::info;

use super::heartbeat::HeartbeatScheduler;
use crate::LifecycleConfig;
use crate::PlmnId;
use crate::RegistryClient;

/// Calls register until it succeeds, waiting the configured retry interval
/// between failed attempts, then hands liveness over to the heartbeat
/// scheduler.
///
/// `attempt_lock` is held for the whole attempt. Cancellation of a
/// superseded attempt is advisory only, so the lock is what guarantees that
/// two attempts never talk to the registry concurrently: a straggler either
/// finishes its current call before a newer attempt gets the lock, or
/// observes cancellation once it acquires it.
pub(crate) async fn register_until_success<C>(
    client: Arc<C>,
    scheduler: Arc<HeartbeatScheduler<C>>,
    attempt_lock: Arc<Mutex<()>>,
    config: LifecycleConfig,
    plmn_list: Vec<PlmnId>,
    token: CancellationToken,
) where
    C: RegistryClient,
{
    let _guard = attempt_lock.lock().await;
    let mut wait = Duration::ZERO;
    loop {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                info!("no-op, registration attempt was cancelled");
                return;
            }
            _ = sleep(wait) => {
                match client.register(plmn_list.clone()).await {
                    Ok(profile) => {
                        info!("register NF instance with updated profile succeeded");
                        // A profile without a cadence gets the configured
                        // default, never an interval a prior registration
                        // happened to apply.
                        let interval = profile
                            .heart_beat_timer
                            .filter(|secs| *secs > 0)
                            .unwrap_or(config.default_heartbeat_secs as i32);
                        scheduler.start(Some(interval), plmn_list);
                        return;
                    }
                    Err(err) => {
                        error!("register NF instance failed, will retry: {err}");
                        wait = config.retry_interval();
                    }
                }
            }
        }
    }
}
