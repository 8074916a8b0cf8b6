use thirtyfour::{By, WebDriver};
use url::Url;

use crate::error::CrawlError;

pub const COOKIE_BANNER_CLOSE_ID: &str = "closeCookieBanner";
pub const LOAD_MORE_CLASS: &str = "ecomerce-items-scroll-more";
pub const PRODUCT_CARD_CLASS: &str = "thumbnail";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreState {
    /// The category has no pagination control at all
    Absent,
    Hidden,
    Visible,
}

/// Browser operations needed to expand and read a category page.
#[allow(async_fn_in_trait)]
pub trait CatalogPage {
    async fn open(&self, url: &Url) -> Result<(), CrawlError>;

    async fn is_ready(&self) -> Result<bool, CrawlError>;

    /// Clicks the cookie banner close button. `false` when there is no banner to close.
    async fn dismiss_cookie_banner(&self) -> Result<bool, CrawlError>;

    async fn load_more_state(&self) -> Result<LoadMoreState, CrawlError>;

    async fn click_load_more(&self) -> Result<(), CrawlError>;

    async fn card_count(&self) -> Result<usize, CrawlError>;

    async fn page_source(&self) -> Result<String, CrawlError>;
}

impl CatalogPage for WebDriver {
    async fn open(&self, url: &Url) -> Result<(), CrawlError> {
        self.goto(url.as_str()).await?;
        Ok(())
    }

    async fn is_ready(&self) -> Result<bool, CrawlError> {
        let ret = self
            .execute("return document.readyState;", Vec::new())
            .await?;

        Ok(ret.json().as_str() == Some("complete"))
    }

    async fn dismiss_cookie_banner(&self) -> Result<bool, CrawlError> {
        // Find all so a missing banner is an empty list instead of NoSuchElement
        let buttons = self.find_all(By::Id(COOKIE_BANNER_CLOSE_ID)).await?;

        match buttons.into_iter().next() {
            Some(button) if button.is_displayed().await? => {
                button.click().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn load_more_state(&self) -> Result<LoadMoreState, CrawlError> {
        let controls = self.find_all(By::ClassName(LOAD_MORE_CLASS)).await?;

        match controls.into_iter().next() {
            None => Ok(LoadMoreState::Absent),
            Some(control) => match control.is_displayed().await? {
                true => Ok(LoadMoreState::Visible),
                false => Ok(LoadMoreState::Hidden),
            },
        }
    }

    async fn click_load_more(&self) -> Result<(), CrawlError> {
        self.find(By::ClassName(LOAD_MORE_CLASS))
            .await?
            .click()
            .await?;
        Ok(())
    }

    async fn card_count(&self) -> Result<usize, CrawlError> {
        Ok(self.find_all(By::ClassName(PRODUCT_CARD_CLASS)).await?.len())
    }

    async fn page_source(&self) -> Result<String, CrawlError> {
        Ok(self.source().await?)
    }
}
