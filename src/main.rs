use anyhow::Context;
use trawl::{configuration::get_configuration, startup::run, telemetry::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;

    init_logger(&configuration.crawler.log_file).with_context(|| {
        format!(
            "Failed to open log file {}",
            configuration.crawler.log_file.display()
        )
    })?;

    let reports = run(configuration).await?;

    for report in &reports {
        log::info!(
            "{}: {} products after {} load more clicks -> {}",
            report.category,
            report.products,
            report.load_more_clicks,
            report.output.display()
        );
    }

    let total: usize = reports.iter().map(|r| r.products).sum();
    log::info!(
        "Finished parsing {} categories, {} products",
        reports.len(),
        total
    );

    Ok(())
}
