use thirtyfour::error::WebDriverError;

#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] WebDriverError),

    #[error("No element matching `{selector}` in product card")]
    MissingElement { selector: &'static str },

    #[error("Element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid css selector `{0}`")]
    InvalidSelector(String),

    #[error("Timed out waiting for {condition} after {attempts} attempts")]
    Timeout { condition: String, attempts: u32 },

    #[error("Load more control still visible after {clicks} clicks")]
    LoadMoreLimit { clicks: u32 },

    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
