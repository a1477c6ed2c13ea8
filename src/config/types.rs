use serde::{Deserialize, Serialize};

use crate::calc::EnginePolicy;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Arithmetic policies for the engine.
    #[serde(default)]
    pub engine: EnginePolicy,
    /// Terminal front end settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the pending expression above the readout (default: true).
    #[serde(default = "default_show_stack")]
    pub show_stack: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_show_stack() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_stack: default_show_stack(),
        }
    }
}
