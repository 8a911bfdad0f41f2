//! Page Configuration
//!
//! Optional JSON block embedded in `index.html`:
//!
//! ```html
//! <script type="application/json" id="shopping-list-config">
//!   { "locale": "tr", "seed_items": true, "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; a missing or broken block falls back to defaults.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "shopping-list-config";

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Turkish => &TURKISH,
        }
    }
}

/// User-facing strings for one locale
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub title_placeholder: &'static str,
    pub add_button: &'static str,
    pub clear_button: &'static str,
    pub delete_button: &'static str,
    pub no_items: &'static str,
    pub start_list: &'static str,
    pub all_done: &'static str,
    pub confirm_clear: &'static str,
    progress: fn(usize, usize) -> String,
}

impl Messages {
    /// Footer text while some items are still pending
    pub fn progress(&self, completed: usize, total: usize) -> String {
        (self.progress)(completed, total)
    }
}

static ENGLISH: Messages = Messages {
    title: "🛒 Shopping List",
    title_placeholder: "Enter an item name",
    add_button: "Add",
    clear_button: "Clear",
    delete_button: "X",
    no_items: "No items in the basket!",
    start_list: "Start adding items to your shopping list!",
    all_done: "You have completed your shopping!",
    confirm_clear: "Are you sure you want to remove every item from the list?",
    progress: |completed, total| format!("{} of {} items completed", completed, total),
};

static TURKISH: Messages = Messages {
    title: "🛒 Alışveriş Listesi",
    title_placeholder: "Ürün adı giriniz",
    add_button: "Ekle",
    clear_button: "Temizle",
    delete_button: "X",
    no_items: "Sepette ürün yok!",
    start_list: "Alışveriş listenizi hazırlamaya başlayabilirsiniz!",
    all_done: "Alışverişi tamamladınız",
    confirm_clear: "Listedeki tüm ürünleri silmek istediğinizden emin misiniz?",
    progress: |completed, total| {
        format!(
            "Alışveriş listenizdeki {} üründen {} tanesini tamamladınız!",
            total, completed
        )
    },
};

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    /// Start with the five sample items instead of an empty list
    pub seed_items: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed_items: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse the JSON config block
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.log_level()?;
        Ok(config)
    }

    /// Read config from the page; `Ok(None)` when there is no config block
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).map(Some),
            _ => Ok(None),
        }
    }

    /// Config from the page, defaults on any problem.
    ///
    /// Runs before the logger exists, so the error is handed back for the
    /// caller to report once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_document() {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }
}
