//! Async session driver.
//!
//! Owns the generator state, publishes every change on a `watch` channel and
//! runs the timer that reverts the "copied" acknowledgment.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::RngCore;
use rand::rngs::OsRng;
use secrecy::ExposeSecret;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::charset::CharClass;
use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::config::GeneratorConfig;
use crate::generator::GeneratorError;
use crate::state::GeneratorState;
use crate::view::FormView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written to the clipboard and acknowledged.
    Copied,
    /// No password shown (nothing generated yet, or the sentinel); the
    /// clipboard was not touched.
    NothingToCopy,
    /// Written, but the password was replaced while the write was pending.
    Superseded,
}

pub struct GeneratorSession<C, R = OsRng> {
    state: Arc<watch::Sender<GeneratorState>>,
    clipboard: C,
    rng: Mutex<R>,
    copied_ack: Duration,
    shutdown: CancellationToken,
}

impl<C: ClipboardWriter> GeneratorSession<C, OsRng> {
    pub fn new(config: &GeneratorConfig, clipboard: C) -> Self {
        Self::with_rng(config, clipboard, OsRng)
    }
}

impl<C, R> GeneratorSession<C, R>
where
    C: ClipboardWriter,
    R: RngCore,
{
    /// Builds a session drawing randomness from `rng` instead of the OS.
    pub fn with_rng(config: &GeneratorConfig, clipboard: C, rng: R) -> Self {
        let (state, _) = watch::channel(GeneratorState::new(config.options));
        Self {
            state: Arc::new(state),
            clipboard,
            rng: Mutex::new(rng),
            copied_ack: config.copied_ack,
            shutdown: CancellationToken::new(),
        }
    }

    /// Observers are notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<GeneratorState> {
        self.state.subscribe()
    }

    pub fn view(&self) -> FormView {
        FormView::from_state(&self.state.borrow())
    }

    pub fn set_length(&self, length: usize) -> Result<(), GeneratorError> {
        let mut result = Ok(());
        self.state.send_if_modified(|state| {
            result = state.set_length(length);
            result.is_ok()
        });
        result
    }

    pub fn set_class(&self, class: CharClass, enabled: bool) {
        self.state.send_modify(|state| state.set_class(class, enabled));
    }

    /// Generates (or regenerates) a password from the current options.
    ///
    /// May run while a copy is pending; that copy then reports
    /// [`CopyOutcome::Superseded`].
    pub fn generate(&self) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.state.send_modify(|state| state.generate(&mut *rng));

        #[cfg(feature = "tracing")]
        tracing::debug!("password regenerated");
    }

    /// Copies the current password to the clipboard.
    ///
    /// # Errors
    /// Returns the clipboard error after logging it; state is left untouched.
    pub async fn copy(&self) -> Result<CopyOutcome, ClipboardError> {
        let request = self.state.borrow().copy_request();
        let Some(request) = request else {
            return Ok(CopyOutcome::NothingToCopy);
        };

        if let Err(e) = self.clipboard.write_text(request.text().expose_secret()).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to copy: {}", e);
            return Err(e);
        }

        let now = Instant::now().into_std();
        let ack = self.copied_ack;
        if !self.state.send_if_modified(|state| state.mark_copied(&request, now, ack)) {
            return Ok(CopyOutcome::Superseded);
        }

        self.spawn_revert();
        Ok(CopyOutcome::Copied)
    }

    fn spawn_revert(&self) {
        let state = Arc::clone(&self.state);
        let token = self.shutdown.clone();
        let ack = self.copied_ack;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(ack) => {
                    let now = Instant::now().into_std();
                    state.send_if_modified(|state| state.tick(now));
                }
            }
        });
    }
}

impl<C, R> Drop for GeneratorSession<C, R> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
