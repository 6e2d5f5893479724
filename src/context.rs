//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_flash::FlashSignals;

use crate::api::FetchTransport;
use crate::config::{ClientConfig, Messages};
use crate::models::TodoId;
use crate::store::AppStore;
use crate::sync::TodoSync;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered todo rows
    pub store: AppStore,
    /// Notice queue
    pub flash: FlashSignals,
    sync: StoredValue<TodoSync<FetchTransport>>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, flash: FlashSignals, config: ClientConfig) -> Self {
        let transport = FetchTransport::new(config.base_url.clone());
        let sync = TodoSync::new(transport, config.messages.clone());
        Self {
            store,
            flash,
            sync: StoredValue::new(sync),
            config: StoredValue::new(config),
        }
    }

    /// Owned handle for use inside a spawned task
    pub fn sync(&self) -> TodoSync<FetchTransport> {
        self.sync.get_value()
    }

    pub fn messages(&self) -> Messages {
        self.config.with_value(|c| c.messages.clone())
    }

    /// Server page for editing a todo
    pub fn edit_href(&self, id: TodoId) -> String {
        self.config
            .with_value(|c| format!("{}/edit/{}", c.base_url.trim_end_matches('/'), id))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
