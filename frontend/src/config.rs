use std::time::Duration;

/// Delay before the second reset-to-top after a forward navigation. Covers
/// lazily loaded content that changes the page height after first paint.
pub const SCROLL_CORRECTION_DELAY_MS: u32 = 100;

/// Vertical offset after which the nav bar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn form_endpoint() -> &'static str {
    "http://localhost:3001/f/dev-inbox" // Local form sink
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> &'static str {
    "https://formsubmit.co/ajax/hello@fieldwork.studio"
}

#[cfg(debug_assertions)]
pub fn site_origin() -> &'static str {
    "http://localhost:8080"
}

#[cfg(not(debug_assertions))]
pub fn site_origin() -> &'static str {
    "https://fieldwork.studio"
}

/// Location of a page's JSON content bundle, served next to the wasm bundle.
pub fn content_url(name: &str) -> String {
    format!("/content/{}.json", name)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub correction_delay: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            correction_delay: Duration::from_millis(SCROLL_CORRECTION_DELAY_MS as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.correction_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_content_url() {
        assert_eq!(content_url("pricing"), "/content/pricing.json");
    }
}
