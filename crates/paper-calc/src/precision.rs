//! 顯示精度與四捨五入

use paper_core::{PrecisionConfig, QuantityUnit, QuantityValue};
use rust_decimal::prelude::{FromPrimitive, RoundingStrategy};
use rust_decimal::Decimal;

/// 單位的建議小數位數
pub fn recommended_precision(unit: QuantityUnit) -> u32 {
    unit.recommended_precision()
}

/// 以單位標籤（"T" / "BOX" / "R" / "매"）查詢建議小數位數
pub fn recommended_precision_for_label(label: &str) -> paper_core::Result<u32> {
    let unit: QuantityUnit = label.parse()?;
    Ok(recommended_precision(unit))
}

/// 依單位精度四捨五入數量，inf / NaN 返回 `None`
pub fn round_quantity(value: f64, unit: QuantityUnit, config: &PrecisionConfig) -> Option<Decimal> {
    round_half_away(value, config.precision_for(unit))
}

pub fn round_quantity_value(quantity: &QuantityValue, config: &PrecisionConfig) -> Option<Decimal> {
    round_quantity(quantity.value, quantity.unit, config)
}

/// 依金額精度四捨五入，inf / NaN 返回 `None`
pub fn round_price(value: f64, config: &PrecisionConfig) -> Option<Decimal> {
    round_half_away(value, config.price_scale)
}

fn round_half_away(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}
