//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::RestTaskApi;
use crate::config::BoardConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to reload tasks from the server; App owns the read side
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<BoardConfig>,
}

impl AppContext {
    pub fn new(config: BoardConfig, set_reload_trigger: WriteSignal<u32>) -> Self {
        Self { set_reload_trigger, config: StoredValue::new(config) }
    }

    /// Trigger a full reload of the board
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client for the configured task endpoint
    pub fn api(&self) -> RestTaskApi {
        self.config.with_value(|c| RestTaskApi::new(c.api_url.as_str()))
    }
}
