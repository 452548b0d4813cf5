pub mod convert;
pub mod material_price;
pub mod prediction;
pub mod price_compare;

#[allow(unused_imports)]
pub use convert::{ConvertQuery, ParquetPreviewResponse, PreviewQuery};
#[allow(unused_imports)]
pub use material_price::{CreateMaterialPrice, MaterialPriceResponse};
#[allow(unused_imports)]
pub use prediction::{CreatePrediction, PredictionResponse};
#[allow(unused_imports)]
pub use price_compare::{
    FilterOptionsResponse, PriceCompareRequest, PriceCompareResponse, PriceDifferenceItem,
    PricePoint,
};
