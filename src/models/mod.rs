pub mod material_prices;
pub mod predictions;

pub use material_prices::{MaterialPrice, NewMaterialPrice};
pub use predictions::{NewPrediction, Prediction};
