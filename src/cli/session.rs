use crate::{
    info,
    management::{EpisodeAck, Navigator, SessionNotifier},
    warning,
};

/// Terminal stand-in for the session-expired prompt. A terminal has no
/// modal to dismiss, so the message is printed and acknowledged in one
/// step.
pub struct TerminalPrompt;

impl SessionNotifier for TerminalPrompt {
    fn notify_expired(&self, ack: EpisodeAck) {
        warning!("Your session has expired. Please sign in again.");
        ack.acknowledge();
    }
}

/// Terminal stand-in for navigation back to the sign-in entry point.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn reset_to_login(&self) {
        info!("Run `swipefy auth <token>` to start a new session.");
    }
}
