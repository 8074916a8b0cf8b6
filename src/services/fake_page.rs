//! In-memory [`CatalogPage`] used by tests in place of a browser session.

use std::{
    cell::Cell,
    collections::{HashMap, VecDeque},
    io,
    rc::Rc,
    sync::Mutex,
};

use url::Url;

use super::{BrowserSession, CatalogPage, LoadMoreState};
use crate::error::CrawlError;

#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    pub cards: Vec<String>,
    /// Cards appended by each load more click, in order
    pub batches: VecDeque<Vec<String>>,
    pub has_load_more: bool,
    /// Clicks leave the control visible and add nothing
    pub stuck: bool,
    pub cookie_banner: bool,
    /// `is_ready` answers false this many times after `open`
    pub not_ready_polls: u32,
}

#[derive(Debug, Default)]
struct State {
    current: Option<FakeCatalog>,
    not_ready_left: u32,
    banner_open: bool,
    clicks: u32,
    banner_clicks: u32,
    opened: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FakePage {
    catalogs: HashMap<String, FakeCatalog>,
    state: Mutex<State>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, url: &str, catalog: FakeCatalog) -> Self {
        self.catalogs.insert(url.to_string(), catalog);
        self
    }

    pub fn clicks(&self) -> u32 {
        self.state.lock().unwrap().clicks
    }

    pub fn banner_clicks(&self) -> u32 {
        self.state.lock().unwrap().banner_clicks
    }

    pub fn opened(&self) -> Vec<String> {
        self.state.lock().unwrap().opened.clone()
    }

    fn with_current<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        assert!(state.current.is_some(), "no page opened");
        f(&mut state)
    }
}

pub fn card(title: &str, description: &str, price: &str, stars: usize, reviews: &str) -> String {
    format!(
        r#"<div class="col-md-4 col-xl-4 col-lg-4">
  <div class="card thumbnail">
    <div class="product-wrapper card-body">
      <img class="img-fluid card-img-top image img-responsive" alt="item">
      <div class="caption">
        <h4 class="price float-end card-title pull-right">{price}</h4>
        <h4><a href="/test-sites/e-commerce/more/product/1" class="title" title="{title}">{short}</a></h4>
        <p class="description card-text">{description}</p>
      </div>
      <div class="ratings">
        <p class="review-count float-end">{reviews}</p>
        <p data-rating="{stars}">{star_icons}</p>
      </div>
    </div>
  </div>
</div>"#,
        short = title.chars().take(8).collect::<String>() + "...",
        star_icons = r#"<span class="ws-icon ws-icon-star"></span>"#.repeat(stars),
    )
}

pub fn page_html(cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>E-commerce</title></head>
<body>
<div class="row ecomerce-items ecomerce-items-more">
{}
</div>
</body></html>"#,
        cards.join("\n")
    )
}

impl CatalogPage for FakePage {
    async fn open(&self, url: &Url) -> Result<(), CrawlError> {
        let mut state = self.state.lock().unwrap();
        let catalog = self.catalogs.get(url.as_str()).cloned().unwrap_or_default();

        state.not_ready_left = catalog.not_ready_polls;
        state.banner_open = catalog.cookie_banner && state.banner_clicks == 0;
        state.current = Some(catalog);
        state.opened.push(url.to_string());
        Ok(())
    }

    async fn is_ready(&self) -> Result<bool, CrawlError> {
        self.with_current(|state| match state.not_ready_left {
            0 => Ok(true),
            _ => {
                state.not_ready_left -= 1;
                Ok(false)
            }
        })
    }

    async fn dismiss_cookie_banner(&self) -> Result<bool, CrawlError> {
        self.with_current(|state| match state.banner_open {
            true => {
                state.banner_open = false;
                state.banner_clicks += 1;
                Ok(true)
            }
            false => Ok(false),
        })
    }

    async fn load_more_state(&self) -> Result<LoadMoreState, CrawlError> {
        self.with_current(|state| {
            let catalog = state.current.as_ref().unwrap();
            Ok(match (catalog.has_load_more, catalog.stuck) {
                (false, _) => LoadMoreState::Absent,
                (true, true) => LoadMoreState::Visible,
                (true, false) if catalog.batches.is_empty() => LoadMoreState::Hidden,
                (true, false) => LoadMoreState::Visible,
            })
        })
    }

    async fn click_load_more(&self) -> Result<(), CrawlError> {
        self.with_current(|state| {
            state.clicks += 1;
            let catalog = state.current.as_mut().unwrap();
            if !catalog.stuck {
                if let Some(batch) = catalog.batches.pop_front() {
                    catalog.cards.extend(batch);
                }
            }
            Ok(())
        })
    }

    async fn card_count(&self) -> Result<usize, CrawlError> {
        self.with_current(|state| Ok(state.current.as_ref().unwrap().cards.len()))
    }

    async fn page_source(&self) -> Result<String, CrawlError> {
        self.with_current(|state| Ok(page_html(&state.current.as_ref().unwrap().cards)))
    }
}

/// [`BrowserSession`] over a [`FakePage`] that counts how often it was quit.
pub struct FakeSession {
    page: FakePage,
    quits: Rc<Cell<u32>>,
    fail_quit: bool,
}

impl FakeSession {
    pub fn new(page: FakePage) -> Self {
        FakeSession {
            page,
            quits: Rc::new(Cell::new(0)),
            fail_quit: false,
        }
    }

    pub fn failing_quit(mut self) -> Self {
        self.fail_quit = true;
        self
    }

    /// Shared counter, still readable after the session was consumed by `quit`.
    pub fn quits(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.quits)
    }
}

impl BrowserSession for FakeSession {
    type Page = FakePage;

    fn page(&self) -> &FakePage {
        &self.page
    }

    async fn quit(self) -> Result<(), CrawlError> {
        self.quits.set(self.quits.get() + 1);
        match self.fail_quit {
            true => Err(CrawlError::Io(io::Error::other("session already gone"))),
            false => Ok(()),
        }
    }
}
