pub mod product_csv;

pub use product_csv::*;
