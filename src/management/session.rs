use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Receives the single "reset to the sign-in entry point" command once the
/// user has acknowledged an expired session.
pub trait Navigator: Send + Sync {
    fn reset_to_login(&self);
}

/// Presents the session-expired message. `ack` must be acknowledged exactly
/// once when the user dismisses it; the acknowledgment closes the episode
/// and triggers navigation.
pub trait SessionNotifier: Send + Sync {
    fn notify_expired(&self, ack: EpisodeAck);
}

/// Single-fire gate for session expiration, shared by every in-flight
/// request.
///
/// Two states: normal and "expired episode". The first caller that observes
/// an unauthorized response wins `try_begin_episode` and performs the
/// episode's side effects (credential removal, user notification); all other
/// concurrent observers detect the tripped gate and skip them. The episode
/// ends only through [`EpisodeAck::acknowledge`], after which a new episode
/// can begin.
#[derive(Clone, Default)]
pub struct SessionGuard {
    expired: Arc<AtomicBool>,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts the normal → expired transition. Returns `true` for exactly
    /// one caller per episode; that caller owns the side effects.
    pub fn try_begin_episode(&self) -> bool {
        self.expired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Closes the episode. Returns `true` only for the call that actually
    /// performed the expired → normal transition.
    pub fn end_episode(&self) -> bool {
        self.expired
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn in_episode(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }
}

/// Acknowledgment handle for one expiration episode. Consumed on use, so a
/// notifier cannot acknowledge the same prompt twice; navigation fires only
/// for the acknowledgment that closes the episode.
pub struct EpisodeAck {
    guard: SessionGuard,
    navigator: Arc<dyn Navigator>,
}

impl EpisodeAck {
    pub fn new(guard: SessionGuard, navigator: Arc<dyn Navigator>) -> Self {
        Self { guard, navigator }
    }

    pub fn acknowledge(self) {
        if self.guard.end_episode() {
            self.navigator.reset_to_login();
        }
    }
}
