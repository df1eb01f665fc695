//! Leptos Toast Utilities
//!
//! Transient status messages for Leptos: at most one toast is visible at a
//! time and each one dismisses itself after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before dismissing itself
pub const TOAST_DISMISS_MS: u32 = 5_000;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS class for the toast element
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "message success",
            ToastKind::Error => "message error",
        }
    }
}

/// A single visible toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Monotonically increasing; ties a dismissal timer to the toast it was
    /// armed for
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast state signals
#[derive(Clone, Copy)]
pub struct ToastSignals {
    pub current_read: ReadSignal<Option<Toast>>,
    pub current_write: WriteSignal<Option<Toast>>,
    pub last_id_read: ReadSignal<u64>,
    pub last_id_write: WriteSignal<u64>,
}

pub fn create_toast_signals() -> ToastSignals {
    let (current_read, current_write) = signal(None::<Toast>);
    let (last_id_read, last_id_write) = signal(0u64);
    ToastSignals {
        current_read,
        current_write,
        last_id_read,
        last_id_write,
    }
}

/// Show a toast, replacing any toast currently on screen, and arm its
/// auto-dismissal timer.
pub fn show_toast(signals: ToastSignals, kind: ToastKind, message: impl Into<String>) {
    let id = signals.last_id_read.get_untracked() + 1;
    signals.last_id_write.set(id);
    signals.current_write.set(Some(Toast {
        id,
        kind,
        message: message.into(),
    }));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        signals.current_write.update(|current| {
            if timer_should_dismiss(current.as_ref(), id) {
                *current = None;
            }
        });
    });
}

pub fn show_success(signals: ToastSignals, message: impl Into<String>) {
    show_toast(signals, ToastKind::Success, message);
}

pub fn show_error(signals: ToastSignals, message: impl Into<String>) {
    show_toast(signals, ToastKind::Error, message);
}

/// Whether a timer armed for `timer_id` may clear the toast on screen.
/// A timer only dismisses the exact toast it was armed for; if the toast has
/// been replaced since, the stale timer is a no-op.
pub fn timer_should_dismiss(current: Option<&Toast>, timer_id: u64) -> bool {
    matches!(current, Some(toast) if toast.id == timer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Success,
            message: format!("toast {id}"),
        }
    }

    #[test]
    fn timer_dismisses_its_own_toast() {
        let current = toast(3);
        assert!(timer_should_dismiss(Some(&current), 3));
    }

    #[test]
    fn stale_timer_leaves_newer_toast_alone() {
        let current = toast(4);
        assert!(!timer_should_dismiss(Some(&current), 3));
    }

    #[test]
    fn timer_with_nothing_on_screen_is_a_noop() {
        assert!(!timer_should_dismiss(None, 3));
    }

    #[test]
    fn kind_maps_to_message_classes() {
        assert_eq!(ToastKind::Success.css_class(), "message success");
        assert_eq!(ToastKind::Error.css_class(), "message error");
    }
}
