use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use super::CatalogPage;
use crate::{configuration::BrowserSettings, error::CrawlError};

/// A browser session that hands out its page and must be quit exactly once.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    type Page: CatalogPage;

    fn page(&self) -> &Self::Page;

    async fn quit(self) -> Result<(), CrawlError>;
}

/// A chrome session opened through a running WebDriver server.
pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &BrowserSettings) -> Result<Self, CrawlError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }
        caps.add_arg(&format!(
            "--window-size={},{}",
            settings.window_width, settings.window_height
        ))?;

        let driver = WebDriver::new(settings.webdriver_url.as_str(), caps).await?;
        log::info!("Connected to WebDriver at {}", settings.webdriver_url);

        Ok(Droid { driver })
    }
}

impl BrowserSession for Droid {
    type Page = WebDriver;

    fn page(&self) -> &WebDriver {
        &self.driver
    }

    async fn quit(self) -> Result<(), CrawlError> {
        self.driver.quit().await?;
        log::info!("Browser session closed");
        Ok(())
    }
}
