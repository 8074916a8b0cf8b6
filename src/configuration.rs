use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};
use url::Url;

use crate::{domain::Category, services::WaitPolicy};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub browser: BrowserSettings,
    pub crawler: CrawlerSettings,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BrowserSettings {
    pub webdriver_url: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub headless: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_width: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_height: u32,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: false,
            window_width: 1920,
            window_height: 1080,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CrawlerSettings {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub settle_interval_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub settle_max_attempts: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub load_more_interval_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub load_more_max_attempts: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_load_more_clicks: u32,
    pub categories: Vec<CategorySettings>,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            base_url: "https://webscraper.io/test-sites/e-commerce/more/".to_string(),
            output_dir: PathBuf::from("."),
            log_file: PathBuf::from("parser.log"),
            settle_interval_ms: 100,
            settle_max_attempts: 50,
            load_more_interval_ms: 100,
            load_more_max_attempts: 50,
            max_load_more_clicks: 500,
            categories: [
                ("home", ""),
                ("computers", "computers/"),
                ("laptops", "computers/laptops"),
                ("tablets", "computers/tablets"),
                ("phones", "phones/"),
                ("touch", "phones/touch"),
            ]
            .into_iter()
            .map(|(name, path)| CategorySettings {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect(),
        }
    }
}

impl CrawlerSettings {
    /// Resolves every configured category path against `base_url`, keeping the configured order.
    pub fn categories(&self) -> Result<Vec<Category>, url::ParseError> {
        let base = Url::parse(&self.base_url)?;

        self.categories
            .iter()
            .map(|c| {
                Ok(Category {
                    name: c.name.clone(),
                    url: base.join(&c.path)?,
                })
            })
            .collect()
    }

    pub fn settle_policy(&self) -> WaitPolicy {
        WaitPolicy {
            interval: Duration::from_millis(self.settle_interval_ms),
            max_attempts: self.settle_max_attempts,
        }
    }

    pub fn load_more_policy(&self) -> WaitPolicy {
        WaitPolicy {
            interval: Duration::from_millis(self.load_more_interval_ms),
            max_attempts: self.load_more_max_attempts,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategorySettings {
    pub name: String,
    #[serde(default)]
    pub path: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No working directory: {}", e)))?;

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")).required(false))
        // E.g. `APP_BROWSER__WEBDRIVER_URL=http://chrome:4444` sets `browser.webdriver_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
