//! Toast notifications.
//!
//! At most one toast is shown at a time. Pushing a new toast replaces the
//! current one; toasts expire after [`TOAST_DURATION`].

use crate::constants::TOAST_DURATION;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Error,
}

impl ToastVariant {
    pub fn default_duration(self) -> Duration {
        TOAST_DURATION
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Error => "✗",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    /// Fades out over the last 300ms unless motion is reduced
    pub fn opacity(&self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 1.0;
        }
        let fade = Duration::from_millis(300);
        let remaining = self.duration.saturating_sub(self.created_at.elapsed());
        if remaining >= fade {
            1.0
        } else {
            remaining.as_secs_f32() / fade.as_secs_f32()
        }
    }
}

/// Holds the toast currently on screen.
#[derive(Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast`, replacing whatever was showing. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = toast.id;
        self.current = Some(toast);
        id
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Remove the toast with `id` if it is still the one showing.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
