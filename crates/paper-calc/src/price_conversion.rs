//! 價格單位換算
//!
//! 元/噸、元/箱、元/令之間的換算

use paper_core::{PaperSpec, PriceUnit, StockPrice, GRAM_TO_TON, MM2_TO_M2, SHEETS_PER_REAM};

/// 換算係數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactors {
    /// 一令的重量（噸）
    pub tons_per_ream: f64,

    /// 一箱的重量（噸）
    pub tons_per_box: f64,

    /// 一箱的令數
    pub reams_per_box: f64,
}

impl ConversionFactors {
    /// 由紙張規格計算換算係數
    ///
    /// 規格不做驗證：基重、寬度或入數為 0 時係數為 0，
    /// 之後的除法會得到 inf / NaN
    pub fn from_spec(spec: &PaperSpec) -> Self {
        let rect = spec.area_mm2();
        let pack_unit = spec.pack_unit();

        Self {
            tons_per_ream: spec.grammage * rect * SHEETS_PER_REAM * MM2_TO_M2 * GRAM_TO_TON,
            tons_per_box: spec.grammage * rect * pack_unit * MM2_TO_M2 * GRAM_TO_TON,
            reams_per_box: pack_unit / SHEETS_PER_REAM,
        }
    }
}

/// 價格換算器
pub struct PriceConverter;

impl PriceConverter {
    /// 將 `src` 單位的價格換算為 `dst` 單位
    ///
    /// 相同單位或不支援的組合直接返回原價，不視為錯誤
    pub fn convert(orig_price: f64, src: PriceUnit, dst: PriceUnit, spec: &PaperSpec) -> f64 {
        let factors = ConversionFactors::from_spec(spec);
        Self::convert_with_factors(orig_price, src, dst, &factors)
    }

    /// 使用預先計算的係數換算（批次換算同一規格時使用）
    pub fn convert_with_factors(
        orig_price: f64,
        src: PriceUnit,
        dst: PriceUnit,
        factors: &ConversionFactors,
    ) -> f64 {
        match (src, dst) {
            (PriceUnit::WonPerTon, PriceUnit::WonPerReam) => orig_price * factors.tons_per_ream,
            (PriceUnit::WonPerTon, PriceUnit::WonPerBox) => orig_price * factors.tons_per_box,
            (PriceUnit::WonPerBox, PriceUnit::WonPerTon) => orig_price / factors.tons_per_box,
            (PriceUnit::WonPerBox, PriceUnit::WonPerReam) => orig_price / factors.reams_per_box,
            (PriceUnit::WonPerReam, PriceUnit::WonPerTon) => orig_price / factors.tons_per_ream,
            (PriceUnit::WonPerReam, PriceUnit::WonPerBox) => orig_price * factors.reams_per_box,
            _ => {
                tracing::trace!("價格單位 {} → {} 不需換算，返回原價", src, dst);
                orig_price
            }
        }
    }

    /// 將價格條件中的所有價格換算為 `dst` 單位
    ///
    /// 公定價與折扣價共用公定價單位，單價使用自己的單位
    pub fn convert_stock_price(price: &StockPrice, dst: PriceUnit, spec: &PaperSpec) -> StockPrice {
        let factors = ConversionFactors::from_spec(spec);
        let official_src = price.official_price_unit;

        StockPrice {
            official_price: Self::convert_with_factors(price.official_price, official_src, dst, &factors),
            official_price_unit: dst,
            discount_price: Self::convert_with_factors(price.discount_price, official_src, dst, &factors),
            unit_price: Self::convert_with_factors(price.unit_price, price.unit_price_unit, dst, &factors),
            unit_price_unit: dst,
            ..price.clone()
        }
    }
}
