//! App Configuration
//!
//! Game constants plus the per-page settings read from the browser at startup.

/// Points for each matched pair
pub const POINTS_PER_PAIR: u32 = 10;
/// Image that grants the one-time special bonus
pub const SPECIAL_IMAGE: &str = "IMG_0000.jpeg";
pub const SPECIAL_BONUS: u32 = 30;
/// Mistakes that end a memory game
pub const MAX_MISTAKES: u32 = 3;
pub const BOARD_COLUMNS: usize = 4;

/// Pause before a match is sent to the server (ms)
pub const MATCH_CHECK_DELAY_MS: u32 = 250;
/// How long a mismatched pair stays face-up (ms)
pub const MISMATCH_HOLD_MS: u32 = 600;

pub const DEFAULT_CUPS_TOTAL: u32 = 8;
pub const MAX_STRIKES: u32 = 3;
pub const FLASH_MS: u32 = 300;
pub const TIME_GLITCH_MS: u32 = 160;
pub const FINAL_LINE_DELAY_MS: u32 = 900;

pub const IMAGE_BASE: &str = "/static/images";

// Endpoints
pub const MEMORY_START_URL: &str = "/api/game/memory-game/start";
pub const MEMORY_CHECK_URL: &str = "/api/game/memory-game/check-match";
pub const MEMORY_FINISH_URL: &str = "/api/game/memory-game/finish";
pub const RANKING_URL: &str = "/api/ranking";
pub const MANSION_START_URL: &str = "/api/mansion/start";
pub const MANSION_CHOOSE_URL: &str = "/api/mansion/choose";

/// Static image path for a card image name
pub fn image_url(name: &str) -> String {
    format!("{}/{}", IMAGE_BASE, name)
}

/// Which game this page hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Memory,
    Mansion,
}

impl Page {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("mansion") => Page::Mansion,
            _ => Page::Memory,
        }
    }
}

/// Settings read once from the hosting page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub page: Page,
    /// `?debug=1` was passed
    pub debug: bool,
    /// Where "back to start" goes; reload when unset
    pub home_url: Option<String>,
}

impl AppConfig {
    /// Read from `window.location.search` and the body's `data-page` / `data-home-url`
    pub fn from_browser() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let search = window.location().search().unwrap_or_default();
        let body = window.document().and_then(|doc| doc.body());
        let page = body.as_ref().and_then(|b| b.dataset().get("page"));
        let home_url = body
            .as_ref()
            .and_then(|b| b.dataset().get("homeUrl"))
            .filter(|url| !url.trim().is_empty());

        Self {
            page: Page::parse(page.as_deref()),
            debug: debug_flag(&search),
            home_url,
        }
    }
}

/// True only when the query string carries `debug=1`
pub fn debug_flag(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "debug")
        .map_or(false, |(_, value)| value == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag() {
        assert!(debug_flag("?debug=1"));
        assert!(debug_flag("?lang=ja&debug=1"));
        assert!(!debug_flag(""));
        assert!(!debug_flag("?debug=0"));
        assert!(!debug_flag("?debug"));
        assert!(!debug_flag("?notdebug=1"));
    }

    #[test]
    fn test_first_debug_param_wins() {
        // URLSearchParams.get returns the first occurrence
        assert!(!debug_flag("?debug=0&debug=1"));
    }

    #[test]
    fn test_page_parse() {
        assert_eq!(Page::parse(Some("mansion")), Page::Mansion);
        assert_eq!(Page::parse(Some("memory")), Page::Memory);
        assert_eq!(Page::parse(None), Page::Memory);
    }

    #[test]
    fn test_image_url() {
        assert_eq!(image_url("IMG_0001.jpeg"), "/static/images/IMG_0001.jpeg");
    }
}
