//! Where the analysis service lives.
//!
//! `index.html` can point the front-end at another backend with
//! `<meta name="competitor-lens-api" content="https://host:port">`.

use crate::console;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
const API_META_SELECTOR: &str = "meta[name=\"competitor-lens-api\"]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    /// Build a config from a base URL. Trailing slashes are dropped so paths
    /// can be appended with a single `/`; a blank base falls back to the
    /// default service address.
    pub fn new(api_base: &str) -> Self {
        let base = api_base.trim().trim_end_matches('/');
        if base.is_empty() {
            Self::default()
        } else {
            Self {
                api_base: base.to_string(),
            }
        }
    }

    /// Read the base URL from the page's meta tag, if there is one.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(API_META_SELECTOR).ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        match content {
            Some(base) => {
                let config = Self::new(&base);
                console::info(&format!("Analysis service: {}", config.api_base));
                config
            }
            None => {
                console::warn(&format!(
                    "No competitor-lens-api meta tag, using {}",
                    DEFAULT_API_BASE
                ));
                Self::default()
            }
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
