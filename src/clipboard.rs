//! Clipboard backends.
//!
//! Writes are asynchronous and may fail; callers decide how to report the
//! failure. Nothing here retries.

use std::future::Future;
use std::sync::Mutex;
use std::sync::PoisonError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
    #[error("Clipboard task failed: {0}")]
    TaskFailed(String),
}

/// Something that can place text on a clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// The desktop clipboard, accessed through `arboard` on a blocking task.
///
/// The `arboard` handle is kept for the lifetime of the value: on X11 and
/// Wayland the owning handle serves the selection.
#[cfg(feature = "system-clipboard")]
#[derive(Clone)]
pub struct SystemClipboard {
    clipboard: std::sync::Arc<Mutex<arboard::Clipboard>>,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        Ok(Self {
            clipboard: std::sync::Arc::new(Mutex::new(clipboard)),
        })
    }
}

#[cfg(feature = "system-clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let clipboard = std::sync::Arc::clone(&self.clipboard);
        tokio::task::spawn_blocking(move || {
            clipboard
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
    }
}

/// In-process clipboard for headless hosts. Can be told to fail every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: Mutex<usize>,
    failure: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of write attempts, successful or not.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        if let Some(reason) = &self.failure {
            return Err(ClipboardError::WriteFailed(reason.clone()));
        }

        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}

impl<T: ClipboardWriter> ClipboardWriter for std::sync::Arc<T> {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send {
        (**self).write_text(text)
    }
}
