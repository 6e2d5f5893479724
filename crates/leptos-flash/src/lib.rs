//! Leptos Flash Utilities
//!
//! Transient, auto-dismissing alert messages for Leptos.
//! A flash fades (loses its `show` class) after a delay and is detached once
//! its CSS transition ends.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Default delay before a flash starts fading
pub const DEFAULT_DISMISS_MS: u32 = 3000;

/// Detach a faded flash even if no `transitionend` arrives
const FADE_FALLBACK_MS: u32 = 1000;

/// Alert category, rendered as `alert-{level}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }
}

/// A single flash message
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub id: u32,
    pub message: String,
    pub level: FlashLevel,
    /// False once fading has started
    pub shown: bool,
}

impl Flash {
    pub fn class_name(&self) -> String {
        let mut c = format!("alert alert-{} alert-dismissible fade", self.level.as_str());
        if self.shown {
            c.push_str(" show");
        }
        c
    }
}

/// Ordered flash messages, oldest first
#[derive(Clone, Debug, Default)]
pub struct FlashQueue {
    flashes: Vec<Flash>,
    next_id: u32,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible flash and return its id
    pub fn push(&mut self, message: impl Into<String>, level: FlashLevel) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.flashes.push(Flash {
            id,
            message: message.into(),
            level,
            shown: true,
        });
        id
    }

    /// Start fading a flash. Returns false if it is gone or already fading.
    pub fn fade(&mut self, id: u32) -> bool {
        match self.flashes.iter_mut().find(|f| f.id == id) {
            Some(flash) if flash.shown => {
                flash.shown = false;
                true
            }
            _ => false,
        }
    }

    /// Detach a flash. Returns false if it was already removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.flashes.len();
        self.flashes.retain(|f| f.id != id);
        self.flashes.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Flash> {
        self.flashes.iter().find(|f| f.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.flashes.iter().map(|f| f.id).collect()
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}

/// Flash state signals
#[derive(Clone, Copy)]
pub struct FlashSignals {
    pub queue: RwSignal<FlashQueue>,
    dismiss_after_ms: u32,
}

pub fn create_flash_signals(dismiss_after_ms: u32) -> FlashSignals {
    FlashSignals {
        queue: RwSignal::new(FlashQueue::new()),
        dismiss_after_ms,
    }
}

impl FlashSignals {
    /// Show a flash and schedule its fade-out
    pub fn show(&self, message: impl Into<String>, level: FlashLevel) -> u32 {
        let mut id = 0;
        let message = message.into();
        self.queue.update(|q| id = q.push(message, level));

        let signals = *self;
        Timeout::new(self.dismiss_after_ms, move || signals.fade(id)).forget();
        id
    }

    /// Drop the `show` class; removal follows on `transitionend`
    pub fn fade(&self, id: u32) {
        let started = self.queue.try_update(|q| q.fade(id)).unwrap_or(false);
        if started {
            let signals = *self;
            Timeout::new(FADE_FALLBACK_MS, move || signals.remove(id)).forget();
        }
    }

    pub fn remove(&self, id: u32) {
        let _ = self.queue.try_update(|q| q.remove(id));
    }

    fn class_of(&self, id: u32) -> String {
        self.queue
            .with(|q| q.get(id).map(Flash::class_name))
            .unwrap_or_default()
    }

    fn message_of(&self, id: u32) -> String {
        self.queue
            .with_untracked(|q| q.get(id).map(|f| f.message.clone()))
            .unwrap_or_default()
    }
}

/// Container rendering every live flash
#[component]
pub fn FlashContainer(flash: FlashSignals) -> impl IntoView {
    view! {
        <div id="flash-container">
            <For
                each=move || flash.queue.with(FlashQueue::ids)
                key=|id| *id
                children=move |id| {
                    view! {
                        <div
                            class=move || flash.class_of(id)
                            role="alert"
                            on:transitionend=move |_| flash.remove(id)
                        >
                            {flash.message_of(id)}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| flash.fade(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
