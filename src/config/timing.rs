//! Timing values consumed by the notifier and the network layer.

use std::time::Duration;

use super::constants::{
    CONFIG_FETCH_TIMEOUT_MS, DEBOUNCE_DELAY_MS, NETWORK_TIMEOUT_MS, REDIRECT_DELAY_MS,
    TOAST_FADE_DELAY_MS, TOAST_HIDE_DELAY_MS,
};

/// UI and network timing, all measured from the triggering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub toast_fade_delay: Duration,
    /// Measured from show, not from the start of the fade.
    pub toast_hide_delay: Duration,
    pub redirect_delay: Duration,
    pub network_timeout: Duration,
    pub config_fetch_timeout: Duration,
    pub debounce_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            toast_fade_delay: Duration::from_millis(TOAST_FADE_DELAY_MS),
            toast_hide_delay: Duration::from_millis(TOAST_HIDE_DELAY_MS),
            redirect_delay: Duration::from_millis(REDIRECT_DELAY_MS),
            network_timeout: Duration::from_millis(NETWORK_TIMEOUT_MS),
            config_fetch_timeout: Duration::from_millis(CONFIG_FETCH_TIMEOUT_MS),
            debounce_delay: Duration::from_millis(DEBOUNCE_DELAY_MS),
        }
    }
}
