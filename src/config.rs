//! Run configuration
//!
//! Plain in-process defaults; the CLI overrides individual fields.

use crate::wordlists::DictionaryConfig;
use std::time::Duration;

/// Default puzzle page
pub const DEFAULT_URL: &str = "https://spellbee.org/unlimited";

/// Mobile Safari user agent the puzzle page is served to
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 Mobile/15E148 Safari/604.1";

/// CSS selectors for the elements the run reads or drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Container that signals the puzzle has rendered
    pub grid: String,
    pub center_letter: String,
    /// Every letter tile, center possibly included
    pub letters: String,
    pub submit: String,
    /// Subtree watched for score changes
    pub progress_panel: String,
    pub current_title: String,
    pub next_left: String,
    pub next_title: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            grid: "#hexGrid".into(),
            center_letter: "#center-letter p".into(),
            letters: "#hexGrid p".into(),
            submit: "#submit_button".into(),
            progress_panel: ".block-progress__text".into(),
            current_title: ".current-title".into(),
            next_left: ".next-left".into(),
            next_title: ".next-title".into(),
        }
    }
}

/// Browser viewport emulating a phone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobileViewport {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
}

impl Default for MobileViewport {
    fn default() -> Self {
        Self {
            width: 380,
            height: 800,
            device_scale_factor: 3.0,
        }
    }
}

/// Everything a `play` run needs besides the dictionary path
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub headless: bool,
    /// How long to wait for the puzzle grid before giving up
    pub setup_timeout: Duration,
    /// Pause after the grid appears, letting the page finish wiring itself up
    pub settle_delay: Duration,
    /// Delay between words
    pub pace: Duration,
    /// Wait for Enter before closing the browser
    pub keep_open: bool,
    pub viewport: MobileViewport,
    pub user_agent: String,
    pub selectors: Selectors,
    pub dictionary: DictionaryConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            headless: true,
            setup_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_secs(1),
            pace: Duration::from_millis(50),
            keep_open: false,
            viewport: MobileViewport::default(),
            user_agent: MOBILE_USER_AGENT.into(),
            selectors: Selectors::default(),
            dictionary: DictionaryConfig::default(),
        }
    }
}
