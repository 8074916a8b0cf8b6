use crate::{
    configuration::{CrawlerSettings, Settings},
    dal::write_products_to_csv,
    domain::{Category, CategoryReport},
    error::CrawlError,
    services::{extract_products, BrowserSession, CatalogPage, Droid, Navigator},
};

/// Crawls every configured category with one browser session.
pub async fn run(settings: Settings) -> Result<Vec<CategoryReport>, CrawlError> {
    let categories = settings.crawler.categories()?;
    std::fs::create_dir_all(&settings.crawler.output_dir)?;

    let droid = Droid::new(&settings.browser).await?;

    crawl_session(droid, &settings.crawler, &categories).await
}

/// Crawls with `session`, then quits it whether or not the crawl succeeded.
///
/// A crawl error wins over a quit error.
pub async fn crawl_session<S: BrowserSession>(
    session: S,
    settings: &CrawlerSettings,
    categories: &[Category],
) -> Result<Vec<CategoryReport>, CrawlError> {
    let result = crawl_categories(session.page(), settings, categories).await;
    let closed = session.quit().await;

    let reports = result?;
    closed?;
    Ok(reports)
}

pub async fn crawl_categories<P: CatalogPage>(
    page: &P,
    settings: &CrawlerSettings,
    categories: &[Category],
) -> Result<Vec<CategoryReport>, CrawlError> {
    log::info!("Start parsing");
    let navigator = Navigator::from_settings(settings);
    let mut reports = Vec::with_capacity(categories.len());

    for category in categories {
        let pagination = navigator.load_page(page, &category.url).await?;

        log::info!("Finding elements for {}...", category.name);
        let page_source = page.page_source().await?;

        log::info!("Parsing each product for {}...", category.name);
        let products = extract_products(&page_source)?;

        let output = category.csv_path(&settings.output_dir);
        write_products_to_csv(&output, &products)?;

        reports.push(CategoryReport {
            category: category.name.clone(),
            products: products.len(),
            load_more_clicks: pagination.clicks(),
            output,
        });
    }

    Ok(reports)
}
