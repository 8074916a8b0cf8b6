use std::path::Path;

use crate::{
    domain::{Product, PRODUCT_FIELDS},
    error::CrawlError,
};

/// Writes the header row and one row per product, replacing any existing file.
pub fn write_products_to_csv(file_path: &Path, products: &[Product]) -> Result<(), CrawlError> {
    // Header is written by hand so an empty category still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(file_path)?;

    writer.write_record(PRODUCT_FIELDS)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    log::info!("File {} was written", file_path.display());
    Ok(())
}
