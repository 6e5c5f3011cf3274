//! Toast notifications.
//!
//! The planner core reports rejected placements through the [`Notifier`]
//! trait. [`ToastManager`] is the default sink: it keeps a short-lived queue of
//! messages for the front-end to draw and expire.

use std::time::{Duration, Instant};

/// A sink for user-facing advisory messages.
pub trait Notifier {
    /// Report a rejected action.
    fn notify(&mut self, message: &str);

    /// Report something that succeeded. Defaults to [`Notifier::notify`].
    fn inform(&mut self, message: &str) {
        self.notify(message);
    }

    /// Lifetime for messages reported through [`Notifier::notify`]. Sinks
    /// without a notion of lifetime ignore it.
    fn set_duration(&mut self, _duration: Duration) {}
}

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Queue of live toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
    /// Lifetime applied to toasts pushed through [`Notifier::notify`]
    notify_duration: Option<Duration>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the lifetime of rejection toasts.
    pub fn with_notify_duration(mut self, duration: Duration) -> Self {
        self.notify_duration = Some(duration);
        self
    }

    pub fn set_notify_duration(&mut self, duration: Duration) {
        self.notify_duration = Some(duration);
    }

    /// Push a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts whose lifetime has passed.
    pub fn remove_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The most recently pushed toast.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Notifier for ToastManager {
    fn notify(&mut self, message: &str) {
        let mut toast = Toast::warning(message);
        if let Some(duration) = self.notify_duration {
            toast = toast.with_duration(duration);
        }
        self.push(toast);
    }

    fn inform(&mut self, message: &str) {
        self.push(Toast::info(message));
    }

    fn set_duration(&mut self, duration: Duration) {
        self.set_notify_duration(duration);
    }
}

/// Collects messages in memory. Handy for headless callers.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
