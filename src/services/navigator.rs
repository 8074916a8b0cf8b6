use url::Url;

use crate::{configuration::CrawlerSettings, error::CrawlError};

use super::{poll_until, CatalogPage, LoadMoreState, WaitPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// No load more control on the page, the initial cards are everything
    Absent,
    Exhausted { clicks: u32 },
}

impl Pagination {
    pub fn clicks(&self) -> u32 {
        match self {
            Pagination::Absent => 0,
            Pagination::Exhausted { clicks } => *clicks,
        }
    }
}

/// Opens category pages and expands them until every product card is rendered.
#[derive(Debug, Clone)]
pub struct Navigator {
    settle: WaitPolicy,
    load_more: WaitPolicy,
    max_clicks: u32,
}

impl Navigator {
    pub fn new(settle: WaitPolicy, load_more: WaitPolicy, max_clicks: u32) -> Self {
        Navigator {
            settle,
            load_more,
            max_clicks,
        }
    }

    pub fn from_settings(settings: &CrawlerSettings) -> Self {
        Self::new(
            settings.settle_policy(),
            settings.load_more_policy(),
            settings.max_load_more_clicks,
        )
    }

    pub async fn load_page<P: CatalogPage>(
        &self,
        page: &P,
        url: &Url,
    ) -> Result<Pagination, CrawlError> {
        page.open(url).await?;
        poll_until(self.settle, "page to finish loading", move || page.is_ready()).await?;

        if page.dismiss_cookie_banner().await? {
            log::info!("Closed cookie banner on {}", url);
        }

        if page.load_more_state().await? == LoadMoreState::Absent {
            log::info!("Can't load more on {}", url);
            return Ok(Pagination::Absent);
        }

        log::info!("Loading page {}...", url);
        let mut clicks = 0;

        while page.load_more_state().await? == LoadMoreState::Visible {
            if clicks == self.max_clicks {
                return Err(CrawlError::LoadMoreLimit { clicks });
            }

            let cards_before = page.card_count().await?;
            page.click_load_more().await?;
            clicks += 1;

            poll_until(self.load_more, "more products to load", move || async move {
                Ok(page.card_count().await? > cards_before
                    || page.load_more_state().await? != LoadMoreState::Visible)
            })
            .await?;
        }

        log::info!(
            "Loaded all products on {} after {} load more clicks",
            url,
            clicks
        );
        Ok(Pagination::Exhausted { clicks })
    }
}
