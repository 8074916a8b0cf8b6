pub mod catalog_page;
pub mod droid;
pub mod extractor;
#[cfg(test)]
pub(crate) mod fake_page;
pub mod navigator;
pub mod wait;

pub use catalog_page::*;
pub use droid::*;
pub use extractor::*;
pub use navigator::*;
pub use wait::*;
