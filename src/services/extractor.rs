use scraper::{ElementRef, Html, Selector};

use crate::{domain::Product, error::CrawlError};

const CARD: &str = ".thumbnail";
const TITLE: &str = ".title";
const DESCRIPTION: &str = ".description";
const PRICE: &str = ".price";
const STAR: &str = ".ws-icon-star";
const REVIEW_COUNT: &str = ".review-count";

struct CardSelectors {
    card: Selector,
    title: Selector,
    description: Selector,
    price: Selector,
    star: Selector,
    review_count: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self, CrawlError> {
        Ok(CardSelectors {
            card: parse_selector(CARD)?,
            title: parse_selector(TITLE)?,
            description: parse_selector(DESCRIPTION)?,
            price: parse_selector(PRICE)?,
            star: parse_selector(STAR)?,
            review_count: parse_selector(REVIEW_COUNT)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, CrawlError> {
    Selector::parse(css).map_err(|_| CrawlError::InvalidSelector(css.to_string()))
}

/// Maps every product card of a fully loaded category page to a [`Product`], in DOM order.
///
/// A single malformed card fails the whole page.
pub fn extract_products(page_source: &str) -> Result<Vec<Product>, CrawlError> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(page_source);

    document
        .select(&selectors.card)
        .map(|card| parse_single_product(card, &selectors))
        .collect()
}

fn parse_single_product(card: ElementRef, selectors: &CardSelectors) -> Result<Product, CrawlError> {
    // Visible title text is truncated, the full one is in the attribute
    let title = find(card, &selectors.title, TITLE)?
        .attr("title")
        .ok_or(CrawlError::MissingAttribute {
            selector: TITLE,
            attribute: "title",
        })?
        .to_string();

    let description = text_of(find(card, &selectors.description, DESCRIPTION)?);

    let price_text = text_of(find(card, &selectors.price, PRICE)?);
    let price = price_text
        .strip_prefix('$')
        .unwrap_or(&price_text)
        .trim()
        .parse::<f64>()
        .map_err(|_| CrawlError::InvalidNumber {
            field: "price",
            value: price_text.clone(),
        })?;

    let rating = card.select(&selectors.star).count() as u32;

    let review_text = text_of(find(card, &selectors.review_count, REVIEW_COUNT)?);
    let num_of_reviews = review_text
        .split_whitespace()
        .next()
        .and_then(|count| count.parse::<u32>().ok())
        .ok_or_else(|| CrawlError::InvalidNumber {
            field: "num_of_reviews",
            value: review_text.clone(),
        })?;

    Ok(Product {
        title,
        description,
        price,
        rating,
        num_of_reviews,
    })
}

fn find<'a>(
    card: ElementRef<'a>,
    selector: &Selector,
    css: &'static str,
) -> Result<ElementRef<'a>, CrawlError> {
    card.select(selector)
        .next()
        .ok_or(CrawlError::MissingElement { selector: css })
}

/// Text as the browser renders it, with whitespace runs collapsed to one space.
fn text_of(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
