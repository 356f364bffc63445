//! # Paper Calculation Engine
//!
//! 紙張數量與價格換算引擎
//!
//! 所有函數皆為純函數：不持有狀態、沒有 I/O，可在任意執行緒同時呼叫

pub mod discount;
pub mod precision;
pub mod price_conversion;
pub mod quantity_conversion;
pub mod supply_price;

// Re-export 主要類型
pub use discount::DiscountCalculator;
pub use precision::{
    recommended_precision, recommended_precision_for_label, round_price, round_quantity,
    round_quantity_value,
};
pub use price_conversion::{ConversionFactors, PriceConverter};
pub use quantity_conversion::QuantityConverter;
pub use supply_price::{SupplyLine, SupplyPriceCalculator};

use paper_core::{BaseUnit, PaperSpec, PriceUnit, Quantity, StockPrice};

/// 價格單位換算，不支援的組合原值返回
pub fn convert_price(orig_price: f64, src: PriceUnit, dst: PriceUnit, spec: &PaperSpec) -> f64 {
    PriceConverter::convert(orig_price, src, dst, spec)
}

/// 供應價 = 數量 x 單價
pub fn calc_supply_price(spec: &PaperSpec, price: &StockPrice, quantity: f64) -> f64 {
    SupplyPriceCalculator::calculate(spec, price, quantity)
}

/// 依包裝類型換算數量，規格不完整時返回 `None`
pub fn convert_quantity(spec: &PaperSpec, raw_quantity: f64) -> Option<Quantity> {
    QuantityConverter::convert(spec, raw_quantity)
}

/// 以指定輸入單位換算數量
pub fn convert_quantity_with(spec: &PaperSpec, unit: BaseUnit, raw_quantity: f64) -> Option<Quantity> {
    QuantityConverter::convert_with(spec, unit, raw_quantity)
}
