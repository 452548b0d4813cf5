pub mod material_price;
pub mod prediction;
pub mod price_compare;
