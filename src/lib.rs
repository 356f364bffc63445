//! # Paper
//!
//! 紙張數量與價格換算引擎
//!
//! - [`paper_core`]：紙張規格、價格、數量的資料模型
//! - [`paper_calc`]：換算與供應價計算

pub use paper_calc;
pub use paper_core;

pub use paper_calc::{
    calc_supply_price, convert_price, convert_quantity, convert_quantity_with,
    recommended_precision, recommended_precision_for_label,
};
pub use paper_core::{
    BaseUnit, Packaging, PackagingType, PaperError, PaperSpec, PriceUnit, Quantity, QuantityUnit,
    StockPrice,
};
