//! 價格模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PaperError;

/// 價格單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceUnit {
    /// 元/噸
    WonPerTon,
    /// 元/箱
    WonPerBox,
    /// 元/令
    WonPerReam,
}

impl PriceUnit {
    pub const ALL: [PriceUnit; 3] = [PriceUnit::WonPerTon, PriceUnit::WonPerBox, PriceUnit::WonPerReam];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::WonPerTon => "WON_PER_TON",
            PriceUnit::WonPerBox => "WON_PER_BOX",
            PriceUnit::WonPerReam => "WON_PER_REAM",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceUnit {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "WON_PER_TON" => Ok(PriceUnit::WonPerTon),
            "WON_PER_BOX" => Ok(PriceUnit::WonPerBox),
            "WON_PER_REAM" => Ok(PriceUnit::WonPerReam),
            other => Err(PaperError::UnknownPriceUnit(other.to_string())),
        }
    }
}

/// 公定價類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfficialPriceType {
    /// 無公定價
    None,
    /// 手動輸入
    Manual,
    /// 零售價
    Retail,
    /// 批發價
    Wholesale,
}

/// 折扣類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// 無折扣
    None,
    /// 預設折扣率
    Default,
    /// 特別折扣
    Special,
    /// 手動輸入
    Manual,
}

/// 庫存價格條件
///
/// 供應價只使用 `unit_price` / `unit_price_unit`，
/// 公定價與折扣價之間的關係由業務層決定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPrice {
    /// 公定價類型
    pub official_price_type: OfficialPriceType,

    /// 公定價
    pub official_price: f64,

    /// 公定價單位
    pub official_price_unit: PriceUnit,

    /// 折扣類型
    pub discount_type: DiscountType,

    /// 折扣後價格（以公定價單位表示）
    pub discount_price: f64,

    /// 實際單價
    pub unit_price: f64,

    /// 實際單價單位
    pub unit_price_unit: PriceUnit,
}

impl StockPrice {
    /// 只有單價的價格條件（無公定價、無折扣）
    pub fn new(unit_price: f64, unit_price_unit: PriceUnit) -> Self {
        Self {
            official_price_type: OfficialPriceType::None,
            official_price: 0.0,
            official_price_unit: unit_price_unit,
            discount_type: DiscountType::None,
            discount_price: 0.0,
            unit_price,
            unit_price_unit,
        }
    }

    /// 建構器模式：設置公定價
    pub fn with_official_price(
        mut self,
        official_price_type: OfficialPriceType,
        official_price: f64,
        official_price_unit: PriceUnit,
    ) -> Self {
        self.official_price_type = official_price_type;
        self.official_price = official_price;
        self.official_price_unit = official_price_unit;
        self
    }

    /// 建構器模式：設置折扣
    pub fn with_discount(mut self, discount_type: DiscountType, discount_price: f64) -> Self {
        self.discount_type = discount_type;
        self.discount_price = discount_price;
        self
    }

    pub fn has_official_price(&self) -> bool {
        self.official_price_type != OfficialPriceType::None
    }

    pub fn has_discount(&self) -> bool {
        self.discount_type != DiscountType::None
    }
}
