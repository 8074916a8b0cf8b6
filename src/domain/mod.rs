pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
