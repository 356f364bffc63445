//! 供應價計算

use paper_core::{BaseUnit, PaperSpec, PrecisionConfig, PriceUnit, StockPrice, GRAM_TO_TON};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::precision::round_price;
use crate::quantity_conversion::QuantityConverter;

/// 一筆待計價的庫存
#[derive(Debug, Clone, Copy)]
pub struct SupplyLine<'a> {
    pub spec: &'a PaperSpec,
    pub price: &'a StockPrice,
    pub quantity: f64,
}

impl<'a> SupplyLine<'a> {
    pub fn new(spec: &'a PaperSpec, price: &'a StockPrice, quantity: f64) -> Self {
        Self {
            spec,
            price,
            quantity,
        }
    }
}

/// 供應價計算器
pub struct SupplyPriceCalculator;

impl SupplyPriceCalculator {
    /// 計算供應價（數量 x 單價）
    ///
    /// 計價基準依單價單位決定：
    /// - 元/噸：重量（噸）
    /// - 元/箱：原始輸入數量，而不是換算後的箱數
    /// - 元/令：包裝數量（packed），沒有時為 0
    ///
    /// 元/箱 與 元/令 的基準不一致，現行合約依賴此行為，保持原樣
    pub fn calculate(spec: &PaperSpec, price: &StockPrice, quantity: f64) -> f64 {
        let Some(packaging_type) = spec.packaging_type() else {
            tracing::debug!("紙張規格不完整，供應價為 0");
            return 0.0;
        };

        let unit = BaseUnit::for_packaging(packaging_type);
        let Some(converted) = QuantityConverter::convert_with(spec, unit, quantity) else {
            return 0.0;
        };

        let basis = match price.unit_price_unit {
            PriceUnit::WonPerTon => converted.grams * GRAM_TO_TON,
            PriceUnit::WonPerBox => converted.quantity,
            PriceUnit::WonPerReam => converted.packed_value().unwrap_or(0.0),
        };

        price.unit_price * basis
    }

    /// 批次計算，結果順序與輸入相同
    pub fn calculate_many(lines: &[SupplyLine<'_>]) -> Vec<f64> {
        let prices: Vec<f64> = lines
            .par_iter()
            .map(|line| Self::calculate(line.spec, line.price, line.quantity))
            .collect();

        tracing::debug!("批次計算供應價：{} 筆", prices.len());
        prices
    }

    /// 合計供應價並依金額精度四捨五入
    ///
    /// 任一筆為 inf / NaN 時返回 `None`
    pub fn total(lines: &[SupplyLine<'_>], config: &PrecisionConfig) -> Option<Decimal> {
        let sum: f64 = Self::calculate_many(lines).into_iter().sum();
        round_price(sum, config)
    }
}
