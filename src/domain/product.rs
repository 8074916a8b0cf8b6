use serde::Serialize;

/// Column names of the csv output, in field declaration order.
pub const PRODUCT_FIELDS: [&str; 5] = ["title", "description", "price", "rating", "num_of_reviews"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Number of filled star icons on the card
    pub rating: u32,
    pub num_of_reviews: u32,
}
