//! Application Context
//!
//! Shared state provided via Leptos Context API: the active section and the
//! notification handle.

use leptos::prelude::*;
use leptos_toast::{show_error, show_success, ToastSignals};

use crate::section::Section;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently active section - read
    pub section: ReadSignal<Section>,
    /// Currently active section - write
    set_section: WriteSignal<Section>,
    /// Transient notification state
    pub toasts: ToastSignals,
}

impl AppContext {
    pub fn new(
        section: (ReadSignal<Section>, WriteSignal<Section>),
        toasts: ToastSignals,
    ) -> Self {
        Self {
            section: section.0,
            set_section: section.1,
            toasts,
        }
    }

    /// Make `section` the active section; every other panel and nav control
    /// deactivates reactively
    pub fn activate(&self, section: Section) {
        self.set_section.set(section);
    }

    /// Show a success notification, replacing any visible one
    pub fn notify_success(&self, message: impl Into<String>) {
        show_success(self.toasts, message);
    }

    /// Show an error notification, replacing any visible one
    pub fn notify_error(&self, message: impl Into<String>) {
        show_error(self.toasts, message);
    }
}
