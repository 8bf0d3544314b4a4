//! Application Context
//!
//! Page-wide handles provided via the Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::mansion::MansionController;
use crate::memory::MemoryController;

/// Settings read at startup
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

/// Memory game session handle
pub fn use_memory() -> MemoryController {
    use_context::<MemoryController>().expect("MemoryController should be provided")
}

/// Mansion page state handle
pub fn use_mansion() -> MansionController {
    use_context::<MansionController>().expect("MansionController should be provided")
}
