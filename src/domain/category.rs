use std::path::{Path, PathBuf};

use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub url: Url,
}

impl Category {
    pub fn csv_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.csv", self.name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: String,
    pub products: usize,
    pub load_more_clicks: u32,
    pub output: PathBuf,
}
