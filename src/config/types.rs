use serde::{Deserialize, Serialize};

use crate::feed::MBTI_LABELS;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
}

/// View defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Posts per page until the user changes it (default: 5).
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,
}

/// Board service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Scheme + host of the board service, without trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Filter categories, in checkbox order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

/// New-post settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Category attached to posts written from this client.
    #[serde(default = "default_composer_category")]
    pub category: String,
}

fn default_items_per_page() -> i64 {
    5
}

fn default_base_url() -> String {
    "https://gdscmbti.duckdns.org".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_labels() -> Vec<String> {
    MBTI_LABELS.iter().map(|label| label.to_string()).collect()
}

fn default_composer_category() -> String {
    "ISFJ".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            category: default_composer_category(),
        }
    }
}
