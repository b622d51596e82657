//! Heartbeat timer ownership and the timer-expiry callback.
//!
//! The scheduler is an explicit Idle/Armed state machine over one timer
//! task. `start` always disarms before arming, so at most one heartbeat
//! stream exists; the callback re-checks the armed state before doing
//! anything, because a stop may land between timer expiry and callback
//! execution.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::PatchItem;
use crate::PlmnId;
use crate::RegistryClient;
use crate::RegistryError;

pub struct HeartbeatScheduler<C>
where C: RegistryClient
{
    client: Arc<C>,
    state: Mutex<HeartbeatState>,
}

struct HeartbeatState {
    /// Armed timer task. `Some` implies heartbeats are active; stop clears
    /// it before any new timer is armed.
    timer: Option<JoinHandle<()>>,

    /// Interval applied to the armed (or last armed) timer. Used as the
    /// fallback cadence when the registry stops assigning one.
    interval: Duration,
}

impl<C> HeartbeatScheduler<C>
where C: RegistryClient
{
    pub fn new(
        client: Arc<C>,
        default_interval: Duration,
    ) -> Self {
        Self {
            client,
            state: Mutex::new(HeartbeatState {
                timer: None,
                interval: default_interval,
            }),
        }
    }

    /// Arm the heartbeat timer, disarming any previous one first.
    ///
    /// `profile_interval` is the heartbeat cadence the registry returned
    /// with the latest profile, in seconds; absent or non-positive values
    /// fall back to the previously applied interval. Only the callback's
    /// re-arm relies on that fallback — a fresh registration always passes
    /// an explicit cadence, defaulted if the profile carried none.
    pub fn start(
        self: &Arc<Self>,
        profile_interval: Option<i32>,
        plmn_list: Vec<PlmnId>,
    ) {
        let mut state = self.state.lock();
        Self::stop_locked(&mut state);

        let interval = match profile_interval {
            Some(secs) if secs > 0 => Duration::from_secs(secs as u64),
            _ => state.interval,
        };
        state.interval = interval;

        let scheduler = Arc::clone(self);
        state.timer = Some(tokio::spawn(async move {
            sleep(interval).await;
            scheduler.heartbeat(plmn_list).await;
        }));
        debug!("started heartbeat timer: {} sec", interval.as_secs());
    }

    /// Disarm the heartbeat timer. No-op when already idle.
    pub fn stop(&self) {
        let mut state = self.state.lock();
        Self::stop_locked(&mut state);
    }

    /// Whether a heartbeat timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.state.lock().timer.is_some()
    }

    fn stop_locked(state: &mut HeartbeatState) {
        if let Some(timer) = state.timer.take() {
            // Aborting also cancels a callback that already passed its armed
            // check, at its next await point.
            timer.abort();
            debug!("stopped heartbeat timer");
        }
    }

    /// Timer-expiry callback. Sends an NFUpdate marking the instance as
    /// registered; a rejected or failed update triggers one re-registration
    /// attempt. The timer is re-armed regardless of outcome, using the
    /// freshest interval the registry handed back.
    pub(crate) async fn heartbeat(
        self: Arc<Self>,
        plmn_list: Vec<PlmnId>,
    ) {
        if !self.is_armed() {
            info!("heartbeat timer has been stopped, heartbeat will not be sent");
            return;
        }

        let patch = vec![PatchItem::registered_status()];
        let profile_interval = match self.client.update(patch).await {
            Ok(profile) => {
                debug!("update NF instance (heartbeat) succeeded");
                profile.heart_beat_timer
            }
            Err(err) => {
                match &err {
                    RegistryError::Problem(problem) => {
                        warn!("update NF instance (heartbeat) problem details: {problem}");
                    }
                    RegistryError::Transport(_) => {
                        warn!("update NF instance (heartbeat) error: {err}");
                    }
                }
                debug!("NF heartbeat failed, trying to register again");
                match self.client.register(plmn_list.clone()).await {
                    Ok(profile) => {
                        info!("register NF instance with updated profile succeeded");
                        profile.heart_beat_timer
                    }
                    Err(err) => {
                        error!("register NF instance error: {err}");
                        None
                    }
                }
            }
        };

        self.start(profile_interval, plmn_list);
    }
}
