//! UI Components
//!
//! Leptos components for the memory game screens and the mansion page.

mod debug_panel;
mod glass_trigger;
mod memory_board;
mod ranking_list;
mod result_screen;
mod start_screen;

pub use debug_panel::DebugPanel;
pub use glass_trigger::GlassTrigger;
pub use memory_board::MemoryBoard;
pub use ranking_list::RankingList;
pub use result_screen::ResultScreen;
pub use start_screen::StartScreen;
