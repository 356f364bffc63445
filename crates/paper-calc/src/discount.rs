//! 折扣率計算

use paper_core::{PaperSpec, StockPrice};

use crate::price_conversion::PriceConverter;

/// 折扣計算器
pub struct DiscountCalculator;

impl DiscountCalculator {
    /// 折扣率（%）= (1 - 折扣後價格 / 公定價) x 100
    ///
    /// 公定價為 0 時沒有折扣率
    pub fn discount_rate(official_price: f64, discounted_price: f64) -> Option<f64> {
        if official_price == 0.0 {
            return None;
        }
        Some((1.0 - discounted_price / official_price) * 100.0)
    }

    /// 依折扣率（%）計算折扣後價格
    pub fn apply_rate(official_price: f64, rate_percent: f64) -> f64 {
        official_price * (1.0 - rate_percent / 100.0)
    }

    /// 實際單價相對公定價的折扣率
    ///
    /// 單價先換算成公定價單位再比較，沒有公定價時返回 `None`
    pub fn stock_discount_rate(price: &StockPrice, spec: &PaperSpec) -> Option<f64> {
        if !price.has_official_price() {
            return None;
        }

        let unit_price = PriceConverter::convert(
            price.unit_price,
            price.unit_price_unit,
            price.official_price_unit,
            spec,
        );
        Self::discount_rate(price.official_price, unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use paper_core::{OfficialPriceType, Packaging, PriceUnit};

    #[test]
    fn test_discount_rate() {
        assert_relative_eq!(DiscountCalculator::discount_rate(1000.0, 850.0).unwrap(), 15.0, max_relative = 1e-12);
        assert_eq!(DiscountCalculator::discount_rate(1000.0, 1000.0), Some(0.0));
        assert_eq!(DiscountCalculator::discount_rate(0.0, 850.0), None);
    }

    #[test]
    fn test_apply_rate() {
        assert_relative_eq!(DiscountCalculator::apply_rate(1000.0, 15.0), 850.0, max_relative = 1e-12);
        assert_eq!(DiscountCalculator::apply_rate(1000.0, 0.0), 1000.0);
    }

    #[test]
    fn test_stock_discount_rate_across_units() {
        // 一令 0.00005 噸：公定價 100,000 元/噸 = 5 元/令
        let spec = PaperSpec::new(100.0, 1000.0, 1.0, Packaging::ream());
        let price = StockPrice::new(4.0, PriceUnit::WonPerReam).with_official_price(
            OfficialPriceType::Retail,
            100_000.0,
            PriceUnit::WonPerTon,
        );

        let rate = DiscountCalculator::stock_discount_rate(&price, &spec).unwrap();
        assert_relative_eq!(rate, 20.0, max_relative = 1e-9);
    }

    #[test]
    fn test_stock_without_official_price() {
        let spec = PaperSpec::roll(80.0, 900.0);
        let price = StockPrice::new(900_000.0, PriceUnit::WonPerTon);
        assert_eq!(DiscountCalculator::stock_discount_rate(&price, &spec), None);
    }
}
