//! Toast notifier - A single observable, self-dismissing notification slot.
//!
//! State machine:
//!
//! ```text
//! blank --show--> visible --fade delay--> fading --hide delay--> blank
//!                    |                       |
//!                    +--------hide()---------+-----> blank
//! ```
//!
//! At most one lifecycle is in flight. Showing a new toast aborts the
//! previous lifecycle task and bumps a generation counter, so a transition
//! that was already running when it got replaced cannot publish.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::Timing;
use crate::domain::{ToastKind, ToastState};

/// Shared handle to the toast slot. Cloning is cheap; all clones drive the
/// same slot.
#[derive(Clone)]
pub struct Toaster {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<ToastState>,
    lifecycle: Mutex<Lifecycle>,
    fade_delay: Duration,
    hide_delay: Duration,
}

#[derive(Default)]
struct Lifecycle {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Toaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("state", &*self.inner.state.borrow())
            .field("fade_delay", &self.inner.fade_delay)
            .field("hide_delay", &self.inner.hide_delay)
            .finish()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(&Timing::default())
    }
}

impl Toaster {
    pub fn new(timing: &Timing) -> Self {
        Self::with_delays(timing.toast_fade_delay, timing.toast_hide_delay)
    }

    /// `hide_delay` is measured from show, like `fade_delay`.
    pub fn with_delays(fade_delay: Duration, hide_delay: Duration) -> Self {
        let (state, _rx) = watch::channel(ToastState::blank());
        Self {
            inner: Arc::new(Inner {
                state,
                lifecycle: Mutex::new(Lifecycle::default()),
                fade_delay,
                hide_delay,
            }),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    /// Replace whatever is showing and start a fresh lifecycle.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let mut lifecycle = self.inner.lock();
        let generation = lifecycle.restart();

        self.inner
            .state
            .send_replace(ToastState::shown(kind, message));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                lifecycle.task = Some(handle.spawn(async move {
                    inner.run_lifecycle(generation).await;
                }));
            }
            Err(_) => {
                tracing::warn!("No async runtime, toast will stay until hidden explicitly");
            }
        }
    }

    /// Clear the slot immediately and cancel pending transitions.
    pub fn hide(&self) {
        let mut lifecycle = self.inner.lock();
        lifecycle.restart();
        self.inner.state.send_replace(ToastState::blank());
    }

    /// Current snapshot.
    pub fn current(&self) -> ToastState {
        self.inner.state.borrow().clone()
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<ToastState> {
        self.inner.state.subscribe()
    }
}

impl Inner {
    fn lock(&self) -> std::sync::MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_lifecycle(&self, generation: u64) {
        tokio::time::sleep(self.fade_delay).await;
        self.transition(generation, |state| state.fading());

        tokio::time::sleep(self.hide_delay.saturating_sub(self.fade_delay)).await;
        self.transition(generation, |_| ToastState::blank());
    }

    /// Publish only if `generation` is still the live lifecycle.
    fn transition(&self, generation: u64, next: impl FnOnce(ToastState) -> ToastState) {
        let lifecycle = self.lock();
        if lifecycle.generation != generation {
            return;
        }
        let current = self.state.borrow().clone();
        self.state.send_replace(next(current));
    }
}

impl Lifecycle {
    /// Cancel the running lifecycle and return the next generation.
    fn restart(&mut self) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastPhase;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn full_lifecycle() {
        let toaster = Toaster::default();
        toaster.success("saved");
        assert_eq!(toaster.current(), ToastState::shown(ToastKind::Success, "saved"));

        tokio::time::sleep(ms(4600)).await;
        assert_eq!(toaster.current().phase(), ToastPhase::Fading);
        assert_eq!(toaster.current().message, "saved");

        tokio::time::sleep(ms(500)).await;
        assert_eq!(toaster.current(), ToastState::blank());
    }

    #[tokio::test(start_paused = true)]
    async fn hide_clears_immediately_and_cancels_timers() {
        let toaster = Toaster::default();
        toaster.error("failed");
        toaster.hide();
        assert_eq!(toaster.current(), ToastState::blank());

        let mut rx = toaster.subscribe();
        rx.borrow_and_update();
        tokio::time::sleep(ms(6000)).await;
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn works_without_runtime() {
        let toaster = Toaster::default();
        toaster.warning("offline");
        assert_eq!(toaster.current().phase(), ToastPhase::Visible);
        toaster.hide();
        assert_eq!(toaster.current().phase(), ToastPhase::Blank);
    }

    #[test]
    fn stale_generation_does_not_publish() {
        let toaster = Toaster::default();
        toaster.warning("first");
        let stale = toaster.inner.lock().generation;
        toaster.warning("second");

        toaster.inner.transition(stale, |_| ToastState::blank());
        assert_eq!(toaster.current().message, "second");
    }
}
